//! Prompt templates for the four pipeline stages.

/// System prompt shared by every stage's agent
pub const AGENT_SYSTEM_PROMPT: &str = r#"You are a business and technology research agent.

You have access to a search tool. Use it whenever you need current information
about a company, industry, dataset, or publication; skip it when the request
can be answered from the material already provided.

When you have enough information, reply with your final answer as plain text.
Do not describe your reasoning steps in the final answer."#;

/// Boilerplate phrase some responses prepend to the final answer
pub const SOLUTION_ANSWER_PREFIX: &str = "I now know the final answer:";

/// Build the research prompt for a company or industry
///
/// The detailed form asks for a structured company profile; the concise form
/// asks only for key offerings and focus areas.
pub fn build_research_prompt(subject: &str, detailed: bool) -> String {
    if detailed {
        format!(
            "Research the company or industry '{}'. \
             Describe its primary business model, key products and services, \
             target markets, strategic goals, and notable industry trends. \
             Summarize the findings concisely.",
            subject
        )
    } else {
        format!(
            "Research the company or industry '{}'. \
             Find information like its industry, key offerings, strategic focus areas, \
             and any relevant news or reports. Summarize the findings concisely.",
            subject
        )
    }
}

/// Build the use-case brainstorming prompt from a company summary
pub fn build_use_case_prompt(summary: &str) -> String {
    format!(
        "Based on the following company summary, brainstorm potential AI/ML use cases: \n\n{}\n\n\
         Consider use cases related to operations, customer experience, product development, \
         supply chain, marketing, and other relevant areas. \
         Be creative and explore innovative applications. \
         List each use case on its own line.",
        summary
    )
}

/// Build the resource-collection prompt for a single use case
pub fn build_resource_prompt(use_case: &str) -> String {
    format!(
        "Find relevant datasets and resources (e.g., libraries, tools, articles) \
         for the following AI/ML use case: \n\n{}\n\n\
         Search on platforms like Kaggle, Hugging Face, GitHub, and Google Scholar. \
         Provide links to the most relevant resources, one per line.",
        use_case
    )
}

/// Build the solution-proposal prompt from the summary and use cases
pub fn build_solution_prompt(summary: &str, use_cases: &[String]) -> String {
    format!(
        "Based on the following company summary and AI/ML use cases, propose specific GenAI solutions:\n\
         Company Summary:\n{}\n\
         Use Cases:\n{}\n\
         Please list the proposed GenAI solutions in bullet points without any extra \
         sentences or context. Only the solutions, each on a new line.",
        summary,
        use_cases.join(", ")
    )
}
