pub mod stage0_research;
pub mod stage1_use_cases;
pub mod stage2_resources;
pub mod stage3_solutions;

pub use stage0_research::*;
pub use stage1_use_cases::*;
pub use stage2_resources::*;
pub use stage3_solutions::*;
