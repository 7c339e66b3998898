use serde::{Deserialize, Serialize};

/// Kind of a searchable entry supplied by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Channel,
    User,
    Message,
    File,
}

impl CandidateKind {
    /// Get the display name for this candidate kind
    pub fn name(&self) -> &'static str {
        match self {
            CandidateKind::Channel => "Channel",
            CandidateKind::User => "User",
            CandidateKind::Message => "Message",
            CandidateKind::File => "File",
        }
    }

    /// Get the icon for this candidate kind
    pub fn icon(&self) -> &'static str {
        match self {
            CandidateKind::Channel => "📢",
            CandidateKind::User => "👤",
            CandidateKind::Message => "💬",
            CandidateKind::File => "📄",
        }
    }
}

/// A searchable entry supplied by the data source. Read-only to the core;
/// matching never mutates candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub label: String,
    pub secondary_text: Option<String>,
}

impl Candidate {
    pub fn new(kind: CandidateKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            secondary_text: None,
        }
    }

    pub fn with_secondary(
        kind: CandidateKind,
        label: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            secondary_text: Some(secondary.into()),
        }
    }
}

/// Byte offset pair marking the matched region of the annotated text.
/// Always within bounds and on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Which candidate field a highlight anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightField {
    Label,
    Secondary,
}

/// A retained candidate with its highlight spans, recomputed on every query
/// change and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub field: HighlightField,
    pub spans: Vec<HighlightSpan>,
}

impl MatchResult {
    /// Text of the field the highlight spans index into.
    pub fn matched_text(&self) -> &str {
        match self.field {
            HighlightField::Label => &self.candidate.label,
            HighlightField::Secondary => self.candidate.secondary_text.as_deref().unwrap_or(""),
        }
    }
}
