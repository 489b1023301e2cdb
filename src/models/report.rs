use chrono::{DateTime, Utc};

use super::ResourceMap;

/// Aggregate output of one pipeline run
///
/// Assembled once all four stages complete and never mutated afterwards; the
/// export layer renders it to text and CSV.
#[derive(Debug, Clone)]
pub struct ResearchReport {
    /// Unique identifier for this run
    pub run_id: String,
    /// The researched company or industry
    pub subject: String,
    /// Free-text summary from the research stage
    pub summary: String,
    /// Generated AI/ML use cases
    pub use_cases: Vec<String>,
    /// Resource links per use case
    pub resources: ResourceMap,
    /// Proposed GenAI solutions
    pub solutions: Vec<String>,
    /// When the run completed
    pub generated_at: DateTime<Utc>,
}

impl ResearchReport {
    pub fn new(
        subject: impl Into<String>,
        summary: String,
        use_cases: Vec<String>,
        resources: ResourceMap,
        solutions: Vec<String>,
    ) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            subject: subject.into(),
            summary,
            use_cases,
            resources,
            solutions,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_get_distinct_run_ids() {
        let a = ResearchReport::new("Tesla", String::new(), vec![], ResourceMap::new(), vec![]);
        let b = ResearchReport::new("Tesla", String::new(), vec![], ResourceMap::new(), vec![]);
        assert_ne!(a.run_id, b.run_id);
        assert_eq!(a.subject, "Tesla");
    }
}
