// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized (lower-cased) word produced by a tokenizer.
pub type Token = String;

/// A class label a document can be assigned to.
pub type Category = String;

/// Position of a category in the model's category table.
/// Categories are numbered in the order they were first trained.
pub type CategoryId = usize;

/// Everything the model has learned about a single category.
/// This is the "value" in our category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub label: Category,
    /// Number of training documents labeled with this category.
    pub document_count: u64,
    /// Occurrences of each word across all documents of this category.
    /// A word absent from the map has a count of zero.
    pub word_counts: HashMap<Token, u64>,
}

impl CategoryStats {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            document_count: 0,
            word_counts: HashMap::new(),
        }
    }

    /// Total word occurrences in this category (sum of all word counts).
    pub fn total_words(&self) -> u64 {
        self.word_counts.values().sum()
    }

    pub fn word_count(&self, word: &str) -> u64 {
        self.word_counts.get(word).copied().unwrap_or(0)
    }
}

/// A classified category together with its log-space score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: Category,
    pub score: f64,
}
