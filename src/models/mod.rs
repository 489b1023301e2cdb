pub mod report;
pub mod resource;

pub use report::*;
pub use resource::*;
