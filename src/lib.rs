// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;
pub mod tokenizer;

pub use crate::core::engine::ClassifierEngine;
pub use crate::core::model::NaiveBayesModel;
pub use crate::core::types::{Category, CategoryStats, Prediction, Token};
pub use crate::error::{ClassifierError, Result};
pub use crate::learning::TrainingExample;
pub use crate::tokenizer::{TextTokenizer, Tokenizer};
