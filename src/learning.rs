// File: src/learning.rs
use crate::core::model::NaiveBayesModel;
use crate::tokenizer::Tokenizer;

pub struct LearningEngine;

/// A raw document together with the category it belongs to.
#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub document: String,
    pub category: String,
}

impl TrainingExample {
    pub fn new(document: &str, category: &str) -> Self {
        Self {
            document: document.to_string(),
            category: category.to_string(),
        }
    }
}

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Tokenizes one example and trains the model on it.
    /// Examples with an empty category are skipped; returns whether the
    /// example was learned.
    pub fn learn<T: Tokenizer + ?Sized>(
        &self,
        model: &mut NaiveBayesModel,
        tokenizer: &T,
        example: &TrainingExample,
    ) -> bool {
        if example.category.is_empty() {
            return false;
        }
        let tokens = tokenizer.tokenize(&example.document);
        model.train(&tokens, &example.category);
        true
    }

    /// Repeats single-document training over `examples`.
    /// Returns how many examples were learned.
    pub fn learn_batch<'a, T, I>(&self, model: &mut NaiveBayesModel, tokenizer: &T, examples: I) -> usize
    where
        T: Tokenizer + ?Sized,
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        let mut learned = 0;
        for example in examples {
            if self.learn(model, tokenizer, example) {
                learned += 1;
            }
        }
        learned
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}
