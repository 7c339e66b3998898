//! Candidate supply: the seam between the widget and its data source.

use crate::types::{Candidate, CandidateKind};

/// Supplies candidates, suggestions and recent items to the widget. In
/// production this is backed by an index service; the demo shell and tests
/// use static data.
#[cfg_attr(test, mockall::automock)]
pub trait CandidateProvider {
    /// Ordered candidate set for one evaluation of `query`. The core does
    /// not fetch or cache; a fresh list is supplied per call.
    fn list_candidates(&self, query: &str) -> Vec<Candidate>;

    /// Canned AI prompts shown while the query is empty.
    fn suggestions(&self) -> Vec<String>;

    /// Recently searched or visited items shown while the query is empty.
    fn recent(&self) -> Vec<String>;
}

/// Fixed demo dataset standing in for the production index service.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCandidates;

impl CandidateProvider for StaticCandidates {
    fn list_candidates(&self, _query: &str) -> Vec<Candidate> {
        vec![
            Candidate::new(CandidateKind::Channel, "#general"),
            Candidate::new(CandidateKind::Channel, "#engineering"),
            Candidate::new(CandidateKind::Channel, "#design-moves"),
            Candidate::with_secondary(CandidateKind::User, "Sales Coach", "App · call prep"),
            Candidate::with_secondary(
                CandidateKind::Message,
                "Reorg announcements",
                "#general · posted by HR",
            ),
            Candidate::with_secondary(
                CandidateKind::Message,
                "Latest matching message",
                "#engineering · 2 days ago",
            ),
            Candidate::with_secondary(
                CandidateKind::File,
                "Project Gizmo PRD",
                "Google Doc · shared by PM",
            ),
            Candidate::with_secondary(CandidateKind::File, "Acme org chart", "document.pdf"),
        ]
    }

    fn suggestions(&self) -> Vec<String> {
        [
            "Help me make the most of my day",
            "@Sales Coach Prep me for my Greenleaf Intro call in 1 hour",
            "Draft an out of office plan for my upcoming PTO",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn recent(&self) -> Vec<String> {
        [
            "Design Moves",
            "Where is the Acme org chart?",
            "Project Gizmo PRD",
            "Reorg announcements",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
