//! Tests for the bounded-input summarization driver
//!
//! These exercise the three-level fallback against a scripted model with a
//! word-based token budget, checking both the produced summaries and the
//! exact sequence of texts submitted to the model.
//!
//! Run with: cargo test driver

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::models::{GenerateError, GenerativeModel, SummarizeError};
    use std::sync::Mutex;

    // =========================================================================
    // TEST MODEL
    // =========================================================================

    /// Deterministic fixed-budget model counting one token per word
    ///
    /// Records every text submitted to `generate`. With `reported: true` the
    /// budget is visible to the driver (proactive checks); with `reported:
    /// false` the only signal is the length-exceeded error from the
    /// generation pass itself, as with runtimes that hide their limits.
    struct FixedBudgetModel {
        budget: usize,
        reported: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FixedBudgetModel {
        fn reactive(budget: usize) -> Self {
            Self {
                budget,
                reported: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn proactive(budget: usize) -> Self {
            Self {
                budget,
                reported: true,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn words(text: &str) -> usize {
        text.split_whitespace().count()
    }

    impl GenerativeModel for FixedBudgetModel {
        fn generate(&self, text: &str) -> Result<String, GenerateError> {
            self.calls.lock().unwrap().push(text.to_string());
            if words(text) > self.budget {
                return Err(GenerateError::LengthExceeded);
            }
            Ok(format!("S[{}]", text))
        }

        fn token_budget(&self) -> Option<usize> {
            self.reported.then_some(self.budget)
        }

        fn count_tokens(&self, text: &str) -> usize {
            words(text)
        }
    }

    /// Model whose generation always fails with a backend error
    struct BrokenModel;

    impl GenerativeModel for BrokenModel {
        fn generate(&self, _: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Backend(anyhow::anyhow!("device lost")))
        }
    }

    fn ten_sentence_paragraph() -> String {
        (0..10)
            .map(|i| format!("sentence {:02} body", i))
            .collect::<Vec<_>>()
            .join(". ")
            + "."
    }

    // =========================================================================
    // LEVEL 1: WHOLE DOCUMENT
    // =========================================================================

    #[test]
    fn short_document_issues_one_call_and_returns_output_unmodified() {
        let model = FixedBudgetModel::reactive(100);
        let doc = "Sentence one. Sentence two. Sentence three.";

        let summary = summarize_bounded(&model, doc).unwrap();

        assert_eq!(summary, format!("S[{}]", doc));
        assert_eq!(model.calls(), vec![doc.to_string()]);
    }

    #[test]
    fn empty_document_returns_empty_summary_without_model_calls() {
        let model = FixedBudgetModel::reactive(100);
        assert_eq!(summarize_bounded(&model, "").unwrap(), "");
        assert_eq!(summarize_bounded(&model, "  \n\n\t ").unwrap(), "");
        assert!(model.calls().is_empty());
    }

    // =========================================================================
    // LEVEL 2: PER PARAGRAPH
    // =========================================================================

    #[test]
    fn oversized_document_joins_paragraph_summaries_in_order() {
        let model = FixedBudgetModel::reactive(6);
        let doc = "para alpha one two\n\npara beta three four";

        let summary = summarize_bounded(&model, doc).unwrap();

        assert_eq!(summary, "S[para alpha one two]\nS[para beta three four]");
        assert_eq!(
            model.calls(),
            vec![
                doc.to_string(),
                "para alpha one two".to_string(),
                "para beta three four".to_string(),
            ]
        );
    }

    #[test]
    fn empty_paragraph_fragments_are_discarded() {
        let model = FixedBudgetModel::reactive(6);
        let doc = "\n\npara alpha one two\n \n\npara beta three four\n\n";

        let summary = summarize_bounded(&model, doc).unwrap();

        assert_eq!(summary, "S[para alpha one two]\nS[para beta three four]");
        // One whole-document attempt plus one call per non-empty paragraph.
        assert_eq!(model.calls().len(), 3);
    }

    #[test]
    fn proactive_budget_check_skips_doomed_generation_passes() {
        let reactive = FixedBudgetModel::reactive(6);
        let proactive = FixedBudgetModel::proactive(6);
        let doc = "para alpha one two\n\npara beta three four";

        let expected = summarize_bounded(&reactive, doc).unwrap();
        let summary = summarize_bounded(&proactive, doc).unwrap();

        // Same recovery, same output; the whole-document pass was never paid for.
        assert_eq!(summary, expected);
        assert_eq!(
            proactive.calls(),
            vec![
                "para alpha one two".to_string(),
                "para beta three four".to_string(),
            ]
        );
    }

    // =========================================================================
    // LEVEL 3: SENTENCE SEGMENTS
    // =========================================================================

    #[test]
    fn ten_sentence_paragraph_splits_into_five_and_five() {
        // 30 words total, 15 per half: whole and paragraph passes fail,
        // both segments fit.
        let model = FixedBudgetModel::reactive(20);
        let doc = ten_sentence_paragraph();

        let summary = summarize_bounded(&model, &doc).unwrap();

        let calls = model.calls();
        // whole document, the (identical) single paragraph, then two segments
        assert_eq!(calls.len(), 4);
        let first = &calls[2];
        let second = &calls[3];
        assert_eq!(first.split(". ").count(), 5);
        assert_eq!(second.split(". ").count(), 5);
        assert!(first.starts_with("sentence 00 body. sentence 01 body"));
        assert!(second.starts_with("sentence 05 body. sentence 06 body"));
        assert_eq!(summary, format!("S[{}]\nS[{}]", first, second));
    }

    #[test]
    fn odd_sentence_count_puts_remainder_in_last_segment() {
        // 5 sentences of 3 words: floor(5/2) = 2 in the first segment,
        // 3 in the second.
        let model = FixedBudgetModel::reactive(10);
        let doc = (0..5)
            .map(|i| format!("sentence {:02} body", i))
            .collect::<Vec<_>>()
            .join(". ");

        summarize_bounded(&model, &doc).unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[2].split(". ").count(), 2);
        assert_eq!(calls[3].split(". ").count(), 3);
    }

    #[test]
    fn segments_are_rejoined_with_period_space() {
        let model = FixedBudgetModel::reactive(20);
        summarize_bounded(&model, &ten_sentence_paragraph()).unwrap();

        for segment in &model.calls()[2..] {
            assert!(segment.contains(". "));
            assert!(!segment.contains(".."));
            assert!(!segment.ends_with('.'));
        }
    }

    #[test]
    fn mixed_document_appends_segment_partials_within_paragraph_order() {
        // First paragraph fits; second needs the sentence-level fallback.
        let model = FixedBudgetModel::reactive(20);
        let doc = format!("short leading paragraph\n{}", ten_sentence_paragraph());

        let summary = summarize_bounded(&model, &doc).unwrap();

        let partials: Vec<&str> = summary.split('\n').collect();
        assert_eq!(partials.len(), 3);
        assert_eq!(partials[0], "S[short leading paragraph]");
        assert!(partials[1].starts_with("S[sentence 00 body"));
        assert!(partials[2].starts_with("S[sentence 05 body"));
    }

    #[test]
    fn segment_still_over_budget_surfaces_length_exceeded() {
        // Even a single sentence exceeds this budget.
        let model = FixedBudgetModel::reactive(2);
        let err = summarize_bounded(&model, &ten_sentence_paragraph()).unwrap_err();
        assert!(matches!(err, SummarizeError::LengthExceeded));
    }

    #[test]
    fn split_policy_segment_count_is_configurable() {
        // 30 words over 3 segments: 10 words each under a budget of 12.
        let model = FixedBudgetModel::reactive(12);
        let policy = SplitPolicy { segments: 3 };

        summarize_bounded_with(&model, &ten_sentence_paragraph(), policy).unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 5);
        let sizes: Vec<usize> = calls[2..]
            .iter()
            .map(|segment| segment.split(". ").count())
            .collect();
        assert_eq!(sizes, vec![3, 3, 4]);
    }

    // =========================================================================
    // ERRORS AND DETERMINISM
    // =========================================================================

    #[test]
    fn backend_errors_propagate_without_retry() {
        let err = summarize_bounded(&BrokenModel, "any document").unwrap_err();
        assert!(matches!(err, SummarizeError::Backend(_)));
    }

    #[test]
    fn repeated_calls_issue_the_same_sub_call_sequence() {
        let doc = format!("lead paragraph here\n{}", ten_sentence_paragraph());

        let first = FixedBudgetModel::reactive(20);
        let second = FixedBudgetModel::reactive(20);
        let a = summarize_bounded(&first, &doc).unwrap();
        let b = summarize_bounded(&second, &doc).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.calls(), second.calls());
    }

    // =========================================================================
    // PARTITION
    // =========================================================================

    #[test]
    fn partition_divides_evenly_with_remainder_last() {
        let sentences: Vec<&str> = vec!["a", "b", "c", "d", "e", "f", "g"];
        let groups = partition(&sentences, 2);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 4);
    }

    #[test]
    fn partition_never_emits_empty_groups() {
        let sentences: Vec<&str> = vec!["only"];
        let groups = partition(&sentences, 2);
        assert_eq!(groups, vec![&["only"][..]]);
        assert!(partition(&[], 2).is_empty());
    }
}
