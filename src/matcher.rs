//! Typeahead matching: filters candidates by case-insensitive substring
//! containment and derives highlight spans for rendering.

use crate::types::{Candidate, CandidateKind, HighlightField, HighlightSpan, MatchResult};

/// Filter `candidates` by `query`, preserving input order. Only meaningful
/// in keyword mode; an empty or whitespace-only query yields no results.
/// Pure over its inputs, so repeated calls are idempotent.
pub fn match_candidates(query: &str, candidates: &[Candidate]) -> Vec<MatchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    candidates
        .iter()
        .filter_map(|candidate| match_one(candidate, query, &query_lower))
        .collect()
}

fn match_one(candidate: &Candidate, query: &str, query_lower: &str) -> Option<MatchResult> {
    if let Some(span) = match_label(candidate, query, query_lower) {
        return Some(MatchResult {
            candidate: candidate.clone(),
            field: HighlightField::Label,
            spans: vec![span],
        });
    }

    // Absent secondary text never matches.
    let secondary = candidate.secondary_text.as_deref()?;
    let span = find_case_insensitive(secondary, query_lower)?;
    Some(MatchResult {
        candidate: candidate.clone(),
        field: HighlightField::Secondary,
        spans: vec![span],
    })
}

/// Channel labels carry a leading `#`. A query without one matches the bare
/// channel name, with the span shifted back onto the raw label; a query
/// with `#` matches the raw label as-is.
fn match_label(candidate: &Candidate, query: &str, query_lower: &str) -> Option<HighlightSpan> {
    if candidate.kind == CandidateKind::Channel && !query.starts_with('#') {
        if let Some(bare) = candidate.label.strip_prefix('#') {
            let span = find_case_insensitive(bare, query_lower)?;
            return Some(HighlightSpan {
                start: span.start + 1,
                end: span.end + 1,
            });
        }
    }
    find_case_insensitive(&candidate.label, query_lower)
}

/// First case-insensitive occurrence of `needle_lower` in `haystack`, as
/// byte offsets into the original text. Lowercasing can shift byte offsets
/// around multi-byte characters, so the position found in the lowered text
/// is mapped back through char counts, keeping both offsets on char
/// boundaries.
fn find_case_insensitive(haystack: &str, needle_lower: &str) -> Option<HighlightSpan> {
    if needle_lower.is_empty() {
        return None;
    }
    let hay_lower = haystack.to_lowercase();
    let lower_start = hay_lower.find(needle_lower)?;

    let char_start = hay_lower[..lower_start].chars().count();
    let char_len = needle_lower.chars().count();

    let start = haystack.char_indices().map(|(i, _)| i).nth(char_start)?;
    let end = haystack
        .char_indices()
        .map(|(i, _)| i)
        .nth(char_start + char_len)
        .unwrap_or(haystack.len());

    Some(HighlightSpan { start, end })
}
