//! Root widget state: owns the query, the mode state machine and the
//! results surface flag, and projects them into render-ready snapshots.

use std::time::Instant;

use serde::Serialize;

use crate::{
    classifier::Classifier,
    matcher,
    mode::{ModeConfig, ModeController, Notification, SearchMode},
    provider::CandidateProvider,
    types::MatchResult,
};

/// What the widget emits for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResults {
    /// Verbatim prompt echo, no highlighting. Producing an answer is the
    /// external AI collaborator's job.
    AiEcho { prompt: String },
    /// Ordered, highlighted typeahead matches.
    Matches(Vec<MatchResult>),
    /// Empty-query surface: canned prompts and recent items.
    Defaults {
        suggestions: Vec<String>,
        recent: Vec<String>,
    },
}

/// One render-ready projection of widget state. Recomputed from scratch on
/// every evaluation; never incrementally patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub mode: SearchMode,
    pub is_open: bool,
    #[serde(skip)]
    pub notification: Option<Notification>,
    pub results: SearchResults,
}

/// Interactive search-bar state. All mutation happens through the event
/// methods below; the presentation layer only reads snapshots.
pub struct SearchBarState<P: CandidateProvider> {
    query: String,
    classifier: Classifier,
    controller: ModeController,
    provider: P,
    is_open: bool,
}

impl<P: CandidateProvider> SearchBarState<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ModeConfig::default())
    }

    pub fn with_config(provider: P, config: ModeConfig) -> Self {
        Self {
            query: String::new(),
            classifier: Classifier::new(),
            controller: ModeController::new(config),
            provider,
            is_open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> SearchMode {
        self.controller.mode()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Text-change event: replaces the query, opens the results surface and
    /// reruns detection.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.is_open = true;
        self.controller
            .on_query_change(&self.classifier, &self.query, now);
    }

    pub fn type_char(&mut self, c: char, now: Instant) {
        let mut next = self.query.clone();
        next.push(c);
        self.set_query(&next, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let mut next = self.query.clone();
        next.pop();
        self.set_query(&next, now);
    }

    /// Explicit toggle click: flips the mode regardless of the verdict.
    pub fn toggle_mode(&mut self, now: Instant) {
        self.controller.on_toggle(&self.query, now);
    }

    /// Focus event: opens the results surface; query and mode untouched.
    pub fn focus(&mut self) {
        self.is_open = true;
    }

    /// Close event: clears the query and closes the surface. The mode
    /// persists across close/reopen.
    pub fn close(&mut self) {
        self.query.clear();
        self.is_open = false;
    }

    /// Submit event: the classification trigger for configurations with
    /// per-keystroke detection disabled.
    pub fn submit(&mut self, now: Instant) {
        self.controller.on_submit(&self.classifier, &self.query, now);
    }

    /// Drop an expired notification; called from the event loop tick.
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// Recompute the full render surface. In AI mode the matcher is not
    /// run; the query is echoed verbatim.
    pub fn evaluate(&self, now: Instant) -> SearchSnapshot {
        let results = if self.query.trim().is_empty() {
            SearchResults::Defaults {
                suggestions: self.provider.suggestions(),
                recent: self.provider.recent(),
            }
        } else {
            match self.controller.mode() {
                SearchMode::Ai => SearchResults::AiEcho {
                    prompt: self.query.clone(),
                },
                SearchMode::Keyword => {
                    let candidates = self.provider.list_candidates(&self.query);
                    SearchResults::Matches(matcher::match_candidates(&self.query, &candidates))
                }
            }
        };

        SearchSnapshot {
            mode: self.controller.mode(),
            is_open: self.is_open,
            notification: self.controller.notification(now).cloned(),
            results,
        }
    }
}
