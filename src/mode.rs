//! Mode state machine: tracks the active interpretation strategy for the
//! query and the transient "switched mode" notification.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Verdict};

/// The active interpretation strategy for the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Ai,
    Keyword,
}

impl SearchMode {
    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Ai => "AI Q&A",
            SearchMode::Keyword => "Traditional",
        }
    }

    /// Get the input placeholder for this mode
    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchMode::Ai => "Ask for anything",
            SearchMode::Keyword => "Search everywhere",
        }
    }

    /// Get the icon for this mode
    pub fn icon(&self) -> &'static str {
        match self {
            SearchMode::Ai => "💬",
            SearchMode::Keyword => "🔍",
        }
    }

    /// The other mode.
    pub fn flipped(&self) -> SearchMode {
        match self {
            SearchMode::Ai => SearchMode::Keyword,
            SearchMode::Keyword => SearchMode::Ai,
        }
    }

    fn from_verdict(verdict: &Verdict) -> SearchMode {
        if verdict.is_natural_language {
            SearchMode::Ai
        } else {
            SearchMode::Keyword
        }
    }
}

/// Transient "switched to X mode" notice. A new transition replaces the
/// pending one, so at most one expiry deadline is ever live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Tunables for the mode state machine.
#[derive(Debug, Clone)]
pub struct ModeConfig {
    /// Mode the controller starts in. The two observed prototype variants
    /// disagree here, so it is configuration, not a constant.
    pub initial_mode: SearchMode,
    /// Run detection on every keystroke. When false, only `on_submit`
    /// classifies (discrete-event variant).
    pub classify_per_keystroke: bool,
    /// How long a mode-switch notification stays visible.
    pub notification_ttl: Duration,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            initial_mode: SearchMode::Ai,
            classify_per_keystroke: true,
            notification_ttl: Duration::from_secs(3),
        }
    }
}

/// State machine owning the active mode. All mutation goes through the
/// transition methods; the matcher and the presentation layer only read.
#[derive(Debug)]
pub struct ModeController {
    config: ModeConfig,
    mode: SearchMode,
    /// Query value pinned by an explicit toggle. Re-classifying the same
    /// string must not revert the toggle; any differing text unpins.
    pinned_query: Option<String>,
    notification: Option<Notification>,
}

impl ModeController {
    pub fn new(config: ModeConfig) -> Self {
        let mode = config.initial_mode;
        Self {
            config,
            mode,
            pinned_query: None,
            notification: None,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The pending notification, if it has not expired yet.
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_live(now))
    }

    /// Drop an expired notification. Called from the event loop tick; the
    /// deadline replacement in `notify` is what cancels stale expiries.
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| !n.is_live(now)) {
            self.notification = None;
        }
    }

    /// Text-change event: classifies non-empty input and auto-switches when
    /// the verdict disagrees with the active mode.
    pub fn on_query_change(&mut self, classifier: &Classifier, text: &str, now: Instant) {
        if self.pinned_query.as_deref() == Some(text) {
            return;
        }
        self.pinned_query = None;
        if text.trim().is_empty() || !self.config.classify_per_keystroke {
            return;
        }
        self.apply_verdict(classifier.classify(text), now);
    }

    /// Discrete submit event: classifies even when per-keystroke detection
    /// is disabled.
    pub fn on_submit(&mut self, classifier: &Classifier, text: &str, now: Instant) {
        if self.pinned_query.as_deref() == Some(text) {
            return;
        }
        self.pinned_query = None;
        if text.trim().is_empty() {
            return;
        }
        self.apply_verdict(classifier.classify(text), now);
    }

    /// Explicit user toggle: flips unconditionally and pins the current
    /// query value so the classifier cannot immediately revert it.
    pub fn on_toggle(&mut self, current_query: &str, now: Instant) {
        self.mode = self.mode.flipped();
        self.pinned_query = Some(current_query.to_string());
        self.notify(now);
    }

    fn apply_verdict(&mut self, verdict: Verdict, now: Instant) {
        let target = SearchMode::from_verdict(&verdict);
        if target != self.mode {
            log::debug!(
                "mode switch {:?} -> {:?} ({}, {} signals)",
                self.mode,
                target,
                verdict.reason.name(),
                verdict.matched_signal_count
            );
            self.mode = target;
            self.notify(now);
        }
    }

    fn notify(&mut self, now: Instant) {
        self.notification = Some(Notification {
            text: format!("Switched to {} mode", self.mode.name()),
            expires_at: now + self.config.notification_ttl,
        });
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(ModeConfig::default())
    }
}
