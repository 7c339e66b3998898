//! Query classification: natural-language vs keyword-style input.

use serde::{Deserialize, Serialize};

use crate::patterns::{PatternLibrary, SignalKind};

/// Which rule of the decision policy qualified the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerdictReason {
    /// Input opens with a question word or command verb.
    Opener,
    /// A pronoun fired together with at least one other signal hit.
    PronounContext,
    /// Three or more words dense with signal hits.
    SignalDensity,
    /// Nothing qualified; treat as keyword search.
    Keyword,
    /// Empty or whitespace-only input; no signals evaluated.
    Empty,
}

impl VerdictReason {
    /// Get the display name for this reason
    pub fn name(&self) -> &'static str {
        match self {
            VerdictReason::Opener => "question/command opener",
            VerdictReason::PronounContext => "pronoun context",
            VerdictReason::SignalDensity => "signal density",
            VerdictReason::Keyword => "keyword",
            VerdictReason::Empty => "empty",
        }
    }
}

/// Classification outcome for a single query string. Derived fresh per
/// query; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_natural_language: bool,
    pub matched_signal_count: usize,
    pub reason: VerdictReason,
}

/// Scores input strings against the pattern library, once per keystroke.
#[derive(Debug, Default)]
pub struct Classifier {
    library: PatternLibrary,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            library: PatternLibrary::new(),
        }
    }

    /// Classify free-text input. Total over arbitrary strings; always
    /// returns a verdict.
    ///
    /// Decision policy, first match wins:
    /// 1. question or command opener fires;
    /// 2. pronoun fires and total signal hits >= 2;
    /// 3. word count >= 3 and total signal hits >= 3;
    /// 4. keyword search.
    pub fn classify(&self, text: &str) -> Verdict {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Verdict {
                is_natural_language: false,
                matched_signal_count: 0,
                reason: VerdictReason::Empty,
            };
        }

        // Raw hit count across all categories, not deduplicated per category.
        let mut match_count = 0;
        let mut opener_fired = false;
        let mut pronoun_fired = false;
        for signal in self.library.signals() {
            let hits = signal.match_count(trimmed);
            if hits > 0 {
                match signal.kind() {
                    SignalKind::QuestionOpener | SignalKind::CommandOpener => opener_fired = true,
                    SignalKind::Pronoun => pronoun_fired = true,
                    _ => {}
                }
            }
            match_count += hits;
        }

        let word_count = trimmed.split_whitespace().count();

        let (is_natural_language, reason) = if opener_fired {
            (true, VerdictReason::Opener)
        } else if pronoun_fired && match_count >= 2 {
            (true, VerdictReason::PronounContext)
        } else if word_count >= 3 && match_count >= 3 {
            (true, VerdictReason::SignalDensity)
        } else {
            (false, VerdictReason::Keyword)
        };

        Verdict {
            is_natural_language,
            matched_signal_count: match_count,
            reason,
        }
    }
}
