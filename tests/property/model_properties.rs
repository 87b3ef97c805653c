use nb_core::{NaiveBayesModel, Token};
use proptest::prelude::*;
use std::collections::HashSet;

fn document() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec("[a-e]{1,3}", 0..8)
}

fn labeled_documents() -> impl Strategy<Value = Vec<(Vec<Token>, String)>> {
    prop::collection::vec((document(), "[xyz]"), 1..12)
}

fn train_all(docs: &[(Vec<Token>, String)]) -> NaiveBayesModel {
    let mut model = NaiveBayesModel::new();
    for (tokens, category) in docs {
        model.train(tokens, category);
    }
    model
}

proptest! {
    #[test]
    fn vocabulary_grows_monotonically(docs in labeled_documents()) {
        let mut model = NaiveBayesModel::new();
        let mut seen = HashSet::new();
        let mut previous = 0;
        for (tokens, category) in &docs {
            model.train(tokens, category);
            seen.extend(tokens.iter().cloned());
            prop_assert!(model.vocabulary_size() >= previous);
            prop_assert_eq!(model.vocabulary_size(), seen.len());
            previous = model.vocabulary_size();
        }
    }

    #[test]
    fn word_counts_are_conserved(docs in labeled_documents()) {
        let model = train_all(&docs);
        for stats in model.categories() {
            let expected: usize = docs
                .iter()
                .filter(|(_, category)| *category == stats.label)
                .map(|(tokens, _)| tokens.len())
                .sum();
            prop_assert_eq!(stats.total_words(), expected as u64);
            let documents = docs.iter().filter(|(_, category)| *category == stats.label).count();
            prop_assert_eq!(stats.document_count, documents as u64);
        }
    }

    #[test]
    fn priors_sum_to_one(docs in labeled_documents()) {
        let model = train_all(&docs);
        let total: f64 = model
            .categories()
            .map(|stats| model.prior_probability(&stats.label).unwrap())
            .sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn word_probability_is_positive(docs in labeled_documents(), word in "[a-g]{1,4}") {
        let model = train_all(&docs);
        for stats in model.categories() {
            let p = model.word_probability(&word, &stats.label).unwrap();
            prop_assert!(p > 0.0);
            prop_assert!(p <= 1.0);
        }
    }

    #[test]
    fn training_order_does_not_change_counts(docs in labeled_documents()) {
        let forward = train_all(&docs);
        let mut reversed_docs = docs.clone();
        reversed_docs.reverse();
        let backward = train_all(&reversed_docs);

        prop_assert_eq!(forward.vocabulary_size(), backward.vocabulary_size());
        prop_assert_eq!(forward.categories().count(), backward.categories().count());
        for stats in forward.categories() {
            let other = backward.category(&stats.label).unwrap();
            prop_assert_eq!(stats.document_count, other.document_count);
            prop_assert_eq!(&stats.word_counts, &other.word_counts);
        }
    }

    #[test]
    fn classification_is_deterministic(docs in labeled_documents(), query in document()) {
        let model = train_all(&docs);
        let first = model.classify(&query);
        prop_assert!(first.is_some());
        for _ in 0..3 {
            prop_assert_eq!(&model.classify(&query), &first);
        }
    }

    #[test]
    fn winner_has_the_first_maximal_score(docs in labeled_documents(), query in document()) {
        let model = train_all(&docs);
        let scores = model.scores(&query);
        let max = scores.iter().map(|p| p.score).fold(f64::NEG_INFINITY, f64::max);
        let first_max = scores.iter().find(|p| p.score == max).unwrap();
        prop_assert_eq!(model.classify(&query), Some(first_max.category.clone()));
    }
}
