use omnibar::{Classifier, VerdictReason};

#[cfg(test)]
mod opener_tests {
    use super::*;

    #[test]
    fn should_classify_question_openers_as_natural_language() {
        let classifier = Classifier::new();
        let queries = [
            "What time is the all hands",
            "where is the Acme org chart",
            "Can someone review this",
            "is the deploy done",
            "did we ship the fix",
            "How do I create a channel?",
        ];
        for query in queries {
            let verdict = classifier.classify(query);
            assert!(
                verdict.is_natural_language,
                "expected natural language for {:?}",
                query
            );
            assert_eq!(verdict.reason, VerdictReason::Opener);
        }
    }

    #[test]
    fn should_classify_command_openers_as_natural_language() {
        let classifier = Classifier::new();
        let queries = [
            "find the Q3 report",
            "Draft an out of office plan",
            "suggest lunch spots near the office",
            "explain the reorg",
        ];
        for query in queries {
            let verdict = classifier.classify(query);
            assert!(
                verdict.is_natural_language,
                "expected natural language for {:?}",
                query
            );
            assert_eq!(verdict.reason, VerdictReason::Opener);
        }
    }

    #[test]
    fn should_ignore_opener_words_mid_string() {
        let classifier = Classifier::new();
        // "find" appears, but not at the head of the input
        let verdict = classifier.classify("the find command");
        assert!(!verdict.is_natural_language);
        assert_eq!(verdict.reason, VerdictReason::Keyword);
    }

    #[test]
    fn should_be_case_insensitive() {
        let classifier = Classifier::new();
        assert!(classifier.classify("HOW DO I RESET MY PASSWORD").is_natural_language);
        assert!(classifier.classify("How do I reset my password").is_natural_language);
    }

    #[test]
    fn should_fire_through_trailing_punctuation() {
        let classifier = Classifier::new();
        assert!(classifier.classify("how?").is_natural_language);
    }

    #[test]
    fn should_not_fire_for_longer_words_sharing_a_prefix() {
        let classifier = Classifier::new();
        // "howl" is not "how"
        let verdict = classifier.classify("howl recordings");
        assert!(!verdict.is_natural_language);
    }
}

#[cfg(test)]
mod pronoun_tests {
    use super::*;

    #[test]
    fn should_qualify_pronoun_with_a_second_signal() {
        let classifier = Classifier::new();
        let verdict = classifier.classify("budget for my team");
        assert!(verdict.is_natural_language);
        assert_eq!(verdict.reason, VerdictReason::PronounContext);
        assert_eq!(verdict.matched_signal_count, 2);
    }

    #[test]
    fn should_not_qualify_a_bare_pronoun() {
        let classifier = Classifier::new();
        let verdict = classifier.classify("my budget");
        assert!(!verdict.is_natural_language);
        assert_eq!(verdict.matched_signal_count, 1);
    }
}

#[cfg(test)]
mod density_tests {
    use super::*;

    #[test]
    fn should_qualify_long_input_dense_with_signals() {
        let classifier = Classifier::new();
        // No opener, no pronoun: the x2 + in = 3 raw hits over 8 words
        let verdict = classifier.classify("notes from the meeting in the conference room");
        assert!(verdict.is_natural_language);
        assert_eq!(verdict.reason, VerdictReason::SignalDensity);
        assert_eq!(verdict.matched_signal_count, 3);
    }

    #[test]
    fn should_not_qualify_short_input() {
        let classifier = Classifier::new();
        // Two signal hits but only two words
        let verdict = classifier.classify("in the");
        assert!(!verdict.is_natural_language);
    }

    #[test]
    fn should_not_qualify_sparse_keyword_phrases() {
        let classifier = Classifier::new();
        let verdict = classifier.classify("quarterly revenue numbers");
        assert!(!verdict.is_natural_language);
        assert_eq!(verdict.matched_signal_count, 0);
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn should_short_circuit_empty_input_without_evaluating_signals() {
        let classifier = Classifier::new();
        for query in ["", "   ", "\t\n"] {
            let verdict = classifier.classify(query);
            assert!(!verdict.is_natural_language);
            assert_eq!(verdict.matched_signal_count, 0);
            assert_eq!(verdict.reason, VerdictReason::Empty);
        }
    }

    #[test]
    fn should_treat_a_single_plain_token_as_keyword() {
        let classifier = Classifier::new();
        let verdict = classifier.classify("budget");
        assert!(!verdict.is_natural_language);
        assert_eq!(verdict.reason, VerdictReason::Keyword);
    }

    #[test]
    fn should_always_return_a_verdict() {
        let classifier = Classifier::new();
        // Arbitrary strings are a total domain
        for query in ["🔍🔍🔍", "a", "###", "SELECT * FROM users;"] {
            let _ = classifier.classify(query);
        }
    }
}
