// File: src/core/scoring.rs
//! Probability estimates for the multinomial Naive Bayes model.
//!
//! Nothing here is cached: every probability is recomputed from the raw
//! counts held by [`NaiveBayesModel`].

use crate::core::model::NaiveBayesModel;
use crate::core::types::{CategoryStats, Prediction, Token};

/// P(C): documents labeled `category` over all training documents.
/// Returns `None` when the category was never trained.
pub fn prior_probability(model: &NaiveBayesModel, category: &str) -> Option<f64> {
    model
        .category(category)
        .map(|stats| prior_of(stats, model.total_documents()))
}

/// P(W|C) with additive (Laplace) smoothing over the global vocabulary:
/// `(count(W, C) + 1) / (total_words(C) + |V|)`.
///
/// Words never seen in training still get a strictly positive estimate.
pub fn word_probability(model: &NaiveBayesModel, word: &str, category: &str) -> Option<f64> {
    model.category(category).map(|stats| {
        let denominator = stats.total_words() as f64 + model.vocabulary_size() as f64;
        smoothed(stats.word_count(word), denominator)
    })
}

/// ln P(C) + sum of ln P(W|C) over every token of the document.
pub fn score(model: &NaiveBayesModel, tokens: &[Token], category: &str) -> Option<f64> {
    model.category(category).map(|stats| score_stats(model, stats, tokens))
}

pub(crate) fn prior_of(stats: &CategoryStats, total_documents: u64) -> f64 {
    stats.document_count as f64 / total_documents as f64
}

/// An empty vocabulary leaves nothing to normalize over, so every word
/// gets probability 1 and scoring falls back to the prior alone.
fn smoothed(count: u64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 1.0;
    }
    (count as f64 + 1.0) / denominator
}

/// Scores one category. The denominator of the word probability only
/// depends on the category, so it is computed once per call.
pub(crate) fn score_stats(model: &NaiveBayesModel, stats: &CategoryStats, tokens: &[Token]) -> f64 {
    let denominator = stats.total_words() as f64 + model.vocabulary_size() as f64;
    let mut score = prior_of(stats, model.total_documents()).ln();
    for token in tokens {
        score += smoothed(stats.word_count(token), denominator).ln();
    }
    score
}

/// The first prediction with the strictly greatest score. Later entries
/// that only tie the current best do not replace it.
pub fn best_of(predictions: &[Prediction]) -> Option<&Prediction> {
    let mut best: Option<&Prediction> = None;
    let mut max_score = f64::NEG_INFINITY;
    for prediction in predictions {
        if prediction.score > max_score {
            max_score = prediction.score;
            best = Some(prediction);
        }
    }
    best
}
