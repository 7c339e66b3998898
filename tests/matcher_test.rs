use omnibar::{match_candidates, Candidate, CandidateKind, HighlightField, HighlightSpan};

fn channel(label: &str) -> Candidate {
    Candidate::new(CandidateKind::Channel, label)
}

fn demo_candidates() -> Vec<Candidate> {
    vec![
        channel("#general"),
        channel("#engineering"),
        Candidate::with_secondary(CandidateKind::User, "Sales Coach", "App · call prep"),
        Candidate::with_secondary(
            CandidateKind::Message,
            "Latest matching message",
            "#engineering · 2 days ago",
        ),
        Candidate::with_secondary(CandidateKind::File, "Acme org chart", "document.pdf"),
        Candidate::new(CandidateKind::Message, "standup notes"),
    ]
}

#[cfg(test)]
mod channel_rule_tests {
    use super::*;

    #[test]
    fn should_match_channel_without_hash_prefix() {
        let candidates = vec![channel("#engineering")];
        let results = match_candidates("eng", &candidates);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].field, HighlightField::Label);
        // Highlight anchors past the stripped '#'
        assert_eq!(results[0].spans, vec![HighlightSpan { start: 1, end: 4 }]);
        assert_eq!(&results[0].candidate.label[1..4], "eng");
    }

    #[test]
    fn should_match_channel_with_hash_prefix_against_the_raw_label() {
        let candidates = vec![channel("#engineering")];
        let results = match_candidates("#eng", &candidates);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].spans, vec![HighlightSpan { start: 0, end: 4 }]);
        assert_eq!(&results[0].candidate.label[0..4], "#eng");
    }

    #[test]
    fn should_not_strip_hash_for_other_kinds() {
        // A non-channel label has no '#' to strip; '#gen' simply misses
        let candidates = vec![Candidate::new(CandidateKind::Message, "general updates")];
        assert!(match_candidates("#gen", &candidates).is_empty());
        assert_eq!(match_candidates("gen", &candidates).len(), 1);
    }

    #[test]
    fn should_handle_channel_labels_without_a_leading_hash() {
        let candidates = vec![channel("random")];
        let results = match_candidates("ran", &candidates);
        assert_eq!(results[0].spans, vec![HighlightSpan { start: 0, end: 3 }]);
    }
}

#[cfg(test)]
mod field_priority_tests {
    use super::*;

    #[test]
    fn should_prefer_label_over_secondary_text() {
        let candidates = vec![Candidate::with_secondary(
            CandidateKind::File,
            "Acme org chart",
            "acme budget deck",
        )];
        let results = match_candidates("acme", &candidates);

        assert_eq!(results[0].field, HighlightField::Label);
        assert_eq!(results[0].spans, vec![HighlightSpan { start: 0, end: 4 }]);
    }

    #[test]
    fn should_fall_back_to_secondary_text() {
        let candidates = vec![Candidate::with_secondary(
            CandidateKind::File,
            "Acme org chart",
            "document.pdf",
        )];
        let results = match_candidates("pdf", &candidates);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].field, HighlightField::Secondary);
        assert_eq!(results[0].spans, vec![HighlightSpan { start: 9, end: 12 }]);
        assert_eq!(results[0].matched_text(), "document.pdf");
    }

    #[test]
    fn should_treat_missing_secondary_text_as_never_matching() {
        let candidates = vec![
            Candidate::new(CandidateKind::Message, "standup notes"),
            Candidate::with_secondary(CandidateKind::File, "Acme org chart", "document.pdf"),
        ];
        // "pdf" is only present in the second candidate's secondary text;
        // the first candidate must be skipped, not abort matching
        let results = match_candidates("pdf", &candidates);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.label, "Acme org chart");
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn should_preserve_input_order() {
        let candidates = vec![
            channel("#engineering"),
            Candidate::with_secondary(
                CandidateKind::Message,
                "Latest matching message",
                "#engineering · 2 days ago",
            ),
            Candidate::new(CandidateKind::User, "Enga Larsen"),
        ];
        let results = match_candidates("eng", &candidates);

        let labels: Vec<&str> = results.iter().map(|r| r.candidate.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["#engineering", "Latest matching message", "Enga Larsen"]
        );
    }

    #[test]
    fn should_be_idempotent_for_identical_arguments() {
        let candidates = demo_candidates();
        let first = match_candidates("eng", &candidates);
        let second = match_candidates("eng", &candidates);
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn should_return_nothing_for_an_empty_query() {
        assert!(match_candidates("", &demo_candidates()).is_empty());
        assert!(match_candidates("   ", &demo_candidates()).is_empty());
    }

    #[test]
    fn should_return_nothing_when_nothing_matches() {
        assert!(match_candidates("zzzzz", &demo_candidates()).is_empty());
    }

    #[test]
    fn should_match_case_insensitively() {
        let results = match_candidates("ENG", &demo_candidates());
        assert!(!results.is_empty());
        assert_eq!(results[0].candidate.label, "#engineering");
    }

    #[test]
    fn highlight_spans_stay_within_bounds() {
        let candidates = demo_candidates();
        for query in ["eng", "chart", "PDF", "message", "o", "#gen"] {
            for result in match_candidates(query, &candidates) {
                let text = result.matched_text();
                for span in &result.spans {
                    assert!(span.start < span.end, "empty span for {:?}", query);
                    assert!(span.end <= text.len(), "span out of bounds for {:?}", query);
                    assert!(text.is_char_boundary(span.start));
                    assert!(text.is_char_boundary(span.end));
                }
            }
        }
    }

    #[test]
    fn should_keep_spans_on_char_boundaries_in_multibyte_text() {
        // 日本語混じりのラベルでもバイト境界が壊れないこと
        let candidates = vec![Candidate::new(CandidateKind::Message, "設計Search資料")];
        let results = match_candidates("search", &candidates);

        assert_eq!(results.len(), 1);
        let span = results[0].spans[0];
        let text = results[0].matched_text();
        assert_eq!(&text[span.start..span.end], "Search");
    }
}
