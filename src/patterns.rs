//! Fixed lexical pattern library used as classification signals.
//!
//! Five signal categories: question openers and command openers anchor at the
//! head of the input, pronouns, articles and prepositions match whole tokens
//! anywhere. All predicates are case-insensitive and pure.

use regex::Regex;

/// Question words that open a natural-language query.
pub const QUESTION_OPENERS: &[&str] = &[
    "what", "where", "when", "why", "who", "how", "can", "could", "would", "will", "should", "is",
    "are", "do", "does", "did", "has", "have", "had",
];

/// Command verbs that open an instruction-style query.
pub const COMMAND_OPENERS: &[&str] = &[
    "find", "search", "show", "tell", "help", "get", "create", "make", "write", "draft", "analyze",
    "explain", "suggest",
];

/// Personal pronouns signalling conversational phrasing.
pub const PRONOUNS: &[&str] = &["me", "my", "i", "we", "our", "us", "you", "your"];

/// Articles signalling sentence-like phrasing.
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Prepositions signalling sentence-like phrasing.
pub const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "to", "for", "with", "by", "about", "between", "among", "through", "over",
    "under", "during", "after", "before",
];

/// Enumeration of lexical signal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    QuestionOpener,
    CommandOpener,
    Pronoun,
    Article,
    Preposition,
}

impl SignalKind {
    /// Get the display name for this signal kind
    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::QuestionOpener => "question-opener",
            SignalKind::CommandOpener => "command-opener",
            SignalKind::Pronoun => "pronoun",
            SignalKind::Article => "article",
            SignalKind::Preposition => "preposition",
        }
    }

    /// Openers only count at the head of the input; the rest match anywhere.
    pub fn is_opener(&self) -> bool {
        matches!(self, SignalKind::QuestionOpener | SignalKind::CommandOpener)
    }
}

/// A named lexical rule: a case-insensitive whole-word test over a string.
#[derive(Debug)]
pub struct PatternSignal {
    kind: SignalKind,
    pattern: Regex,
}

impl PatternSignal {
    fn opener(kind: SignalKind, words: &[&str]) -> Self {
        let pattern = format!(r"(?i)^(?:{})\b", words.join("|"));
        Self {
            kind,
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    fn presence(kind: SignalKind, words: &[&str]) -> Self {
        let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
        Self {
            kind,
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Whether the signal fires for this input.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Raw number of hits for this input. Openers are anchored tests and
    /// contribute at most one; presence signals count token occurrences.
    pub fn match_count(&self, text: &str) -> usize {
        if self.kind.is_opener() {
            usize::from(self.pattern.is_match(text))
        } else {
            self.pattern.find_iter(text).count()
        }
    }
}

/// The fixed signal set, compiled once at startup and never mutated.
#[derive(Debug)]
pub struct PatternLibrary {
    signals: Vec<PatternSignal>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            signals: vec![
                PatternSignal::opener(SignalKind::QuestionOpener, QUESTION_OPENERS),
                PatternSignal::opener(SignalKind::CommandOpener, COMMAND_OPENERS),
                PatternSignal::presence(SignalKind::Pronoun, PRONOUNS),
                PatternSignal::presence(SignalKind::Article, ARTICLES),
                PatternSignal::presence(SignalKind::Preposition, PREPOSITIONS),
            ],
        }
    }

    pub fn signals(&self) -> &[PatternSignal] {
        &self.signals
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}
