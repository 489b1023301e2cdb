pub mod search;

pub use search::*;

use async_trait::async_trait;
use thiserror::Error;

/// A named capability the agent can call during its reasoning loop
///
/// The toolset given to an executor is fixed at construction. Tools receive
/// the raw JSON input the model produced and are responsible for decoding
/// their own arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as exposed to the model
    fn name(&self) -> &str;

    /// Short description shown to the model
    fn description(&self) -> &str;

    /// JSON schema of the tool input
    fn input_schema(&self) -> serde_json::Value;

    /// Invoke the tool with the model-provided input
    async fn call(&self, input: &serde_json::Value) -> Result<String, ToolError>;
}

/// Failure modes of a tool invocation
#[derive(Debug, Error)]
pub enum ToolError {
    /// The model produced arguments the tool could not decode. Executors
    /// configured to recover report this back to the model instead of
    /// aborting the run.
    #[error("invalid tool input: {0}")]
    InvalidInput(String),

    /// The underlying search call failed (transport or API error)
    #[error(transparent)]
    Search(#[from] SearchError),
}
