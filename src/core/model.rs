// File: src/core/model.rs
use crate::core::scoring;
use crate::core::types::{Category, CategoryId, CategoryStats, Prediction, Token};
use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A multinomial Naive Bayes model over word tokens.
///
/// All learned state lives in three places: the global vocabulary, and a
/// category table holding each category's document count and word counts.
/// The table is kept in first-insertion order, which is also the order used
/// to break ties between equally scored categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    vocabulary: HashSet<Token>,
    categories: Vec<CategoryStats>,
    /// Maps a label to its slot in `categories`. Rebuilt after loading.
    #[serde(skip)]
    category_index: HashMap<Category, CategoryId>,
}

impl NaiveBayesModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns from one labeled document.
    ///
    /// Every token bumps the category's count for that word and joins the
    /// vocabulary; the category's document count then grows by one, even
    /// for an empty document.
    pub fn train(&mut self, tokens: &[Token], category: &str) {
        let id = self.get_or_create_category(category);
        let stats = &mut self.categories[id];

        for token in tokens {
            *stats.word_counts.entry(token.clone()).or_insert(0) += 1;
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.clone());
            }
        }
        stats.document_count += 1;

        debug!(
            category,
            tokens = tokens.len(),
            documents = stats.document_count,
            vocabulary = self.vocabulary.len(),
            "trained document"
        );
    }

    /// Returns the category with the highest score, or `None` if the model
    /// has never been trained.
    ///
    /// A later category only replaces the current best when its score is
    /// strictly greater, so ties go to the category trained first.
    pub fn classify(&self, tokens: &[Token]) -> Option<Category> {
        self.classify_scored(tokens).map(|prediction| prediction.category)
    }

    /// Like [`classify`](Self::classify), but also returns the winning score.
    pub fn classify_scored(&self, tokens: &[Token]) -> Option<Prediction> {
        let prediction = scoring::best_of(&self.scores(tokens)).cloned();
        debug!(tokens = tokens.len(), ?prediction, "classified document");
        prediction
    }

    /// Scores every known category, in first-insertion order.
    pub fn scores(&self, tokens: &[Token]) -> Vec<Prediction> {
        self.categories
            .iter()
            .map(|stats| Prediction {
                category: stats.label.clone(),
                score: scoring::score_stats(self, stats, tokens),
            })
            .collect()
    }

    pub fn prior_probability(&self, category: &str) -> Option<f64> {
        scoring::prior_probability(self, category)
    }

    pub fn word_probability(&self, word: &str, category: &str) -> Option<f64> {
        scoring::word_probability(self, word, category)
    }

    pub fn score(&self, tokens: &[Token], category: &str) -> Option<f64> {
        scoring::score(self, tokens, category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Known categories in the order they were first trained.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryStats> {
        self.categories.iter()
    }

    pub fn category(&self, label: &str) -> Option<&CategoryStats> {
        self.category_index.get(label).map(|&id| &self.categories[id])
    }

    pub fn document_count(&self, category: &str) -> u64 {
        self.category(category).map_or(0, |stats| stats.document_count)
    }

    pub fn total_documents(&self) -> u64 {
        self.categories.iter().map(|stats| stats.document_count).sum()
    }

    pub fn word_count(&self, category: &str, word: &str) -> u64 {
        self.category(category).map_or(0, |stats| stats.word_count(word))
    }

    pub fn total_words(&self, category: &str) -> u64 {
        self.category(category).map_or(0, CategoryStats::total_words)
    }

    fn get_or_create_category(&mut self, label: &str) -> CategoryId {
        if let Some(&id) = self.category_index.get(label) {
            id
        } else {
            self.categories.push(CategoryStats::new(label));
            let id = self.categories.len() - 1;
            self.category_index.insert(label.to_string(), id);
            id
        }
    }

    /// Rebuilds the label index from the category table and checks that the
    /// deserialized counts are ones `train` could have produced.
    pub(crate) fn rebuild_index(&mut self) -> Result<()> {
        self.category_index.clear();
        for (id, stats) in self.categories.iter().enumerate() {
            if stats.document_count == 0 {
                return Err(ClassifierError::Corrupt(format!(
                    "category '{}' has no documents",
                    stats.label
                )));
            }
            if let Some(word) = stats.word_counts.keys().find(|w| !self.vocabulary.contains(*w)) {
                return Err(ClassifierError::Corrupt(format!(
                    "word '{}' of category '{}' is missing from the vocabulary",
                    word, stats.label
                )));
            }
            if self.category_index.insert(stats.label.clone(), id).is_some() {
                return Err(ClassifierError::Corrupt(format!(
                    "duplicate category '{}'",
                    stats.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sports_model() -> NaiveBayesModel {
        let mut model = NaiveBayesModel::new();
        model.train(&toks(&["ball", "sport", "worldcup", "ball"]), "soccer");
        model.train(&toks(&["ball", "sport", "glove", "bat"]), "baseball");
        model.train(&toks(&["ball", "racket", "court", "sport"]), "tennis");
        model
    }

    #[test]
    fn untrained_model_has_no_prediction() {
        let model = NaiveBayesModel::new();
        assert!(model.is_empty());
        assert_eq!(model.classify(&toks(&["anything"])), None);
        assert_eq!(model.classify(&[]), None);
        assert!(model.scores(&[]).is_empty());
    }

    #[test]
    fn train_accumulates_counts() {
        let model = sports_model();
        assert_eq!(model.word_count("soccer", "ball"), 2);
        assert_eq!(model.word_count("soccer", "racket"), 0);
        assert_eq!(model.word_count("golf", "ball"), 0);
        assert_eq!(model.total_words("soccer"), 4);
        assert_eq!(model.document_count("tennis"), 1);
        assert_eq!(model.total_documents(), 3);
        assert_eq!(model.vocabulary_size(), 7);
        assert!(model.contains_word("worldcup"));
    }

    #[test]
    fn empty_document_still_counts() {
        let mut model = NaiveBayesModel::new();
        model.train(&[], "empty");
        assert_eq!(model.document_count("empty"), 1);
        assert_eq!(model.total_words("empty"), 0);
        assert_eq!(model.vocabulary_size(), 0);
    }

    #[test]
    fn empty_vocabulary_classifies_by_prior() {
        let mut model = NaiveBayesModel::new();
        model.train(&[], "a");
        model.train(&[], "b");
        model.train(&[], "b");
        let query = toks(&["x"]);
        let best = model.classify_scored(&query).unwrap();
        assert_eq!(best.category, "b");
        assert!(best.score.is_finite());
        assert!(model.scores(&query).iter().all(|p| p.score.is_finite()));
    }

    #[test]
    fn racket_sport_is_tennis() {
        let model = sports_model();
        assert_eq!(
            model.classify(&toks(&["racket", "sport"])),
            Some("tennis".to_string())
        );
    }

    #[test]
    fn empty_query_picks_first_trained_on_equal_priors() {
        let model = sports_model();
        assert_eq!(model.classify(&[]), Some("soccer".to_string()));
    }

    #[test]
    fn empty_query_picks_highest_prior() {
        let mut model = sports_model();
        model.train(&toks(&["net"]), "tennis");
        assert_eq!(model.classify(&[]), Some("tennis".to_string()));
    }

    #[test]
    fn categories_keep_insertion_order() {
        let mut model = sports_model();
        model.train(&toks(&["goal"]), "soccer");
        let labels: Vec<&str> = model.categories().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["soccer", "baseball", "tennis"]);
    }

    #[test]
    fn classify_scored_matches_scores() {
        let model = sports_model();
        let tokens = toks(&["glove", "bat"]);
        let best = model.classify_scored(&tokens).unwrap();
        assert_eq!(best.category, "baseball");
        let all = model.scores(&tokens);
        assert_eq!(all.len(), 3);
        let max = all.iter().map(|p| p.score).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(best.score, max);
        assert_eq!(model.score(&tokens, "baseball"), Some(best.score));
    }

    #[test]
    fn rebuild_index_rejects_duplicates() {
        let mut model = sports_model();
        let duplicate = model.categories[0].clone();
        model.categories.push(duplicate);
        assert!(matches!(model.rebuild_index(), Err(ClassifierError::Corrupt(_))));
    }

    #[test]
    fn rebuild_index_rejects_unknown_words() {
        let mut model = sports_model();
        model.vocabulary.remove("ball");
        assert!(matches!(model.rebuild_index(), Err(ClassifierError::Corrupt(_))));
    }
}
