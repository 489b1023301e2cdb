pub mod io;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use io::{write_report_csv, TextReport};
pub use llm::{
    normalize, normalize_lines, AgentExecutor, ExecutionError, ExecutorOptions, GoogleSearchTool,
    ModelClient, ModelConfig, NormalizeOptions, PromptExecutor, SearchConfig, Tool, NA,
};
pub use models::{ResearchReport, ResourceEntry, ResourceMap};
pub use pipeline::{run_pipeline, PipelineConfig, PipelineError, StageName};
pub use stages::{
    find_relevant_resources, gather_information, generate_use_cases, propose_genai_solutions,
    ResearchConfig, SolutionConfig, UseCaseConfig,
};
