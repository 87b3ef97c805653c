use crate::config::ClassifierConfig;
use crate::core::model::NaiveBayesModel;
use crate::core::types::{Category, Prediction};
use crate::error::{ClassifierError, Result};
use crate::learning::{LearningEngine, TrainingExample};
use crate::persistence::{load_from_disk, save_to_disk};
use crate::tokenizer::{TextTokenizer, Tokenizer};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// The engine owns the model and tokenizes documents before they reach it.
// The model itself only ever sees tokens.
pub struct ClassifierEngine<T: Tokenizer = TextTokenizer> {
    model: NaiveBayesModel,
    tokenizer: T,
    learning_engine: LearningEngine,
    model_path: Option<PathBuf>,
}

impl ClassifierEngine<TextTokenizer> {
    pub fn new() -> Self {
        Self::with_tokenizer(TextTokenizer::default())
    }

    pub fn from_file_or_new(path: &Path) -> Self {
        let mut engine = Self::new();
        engine.model = load_or_new(path);
        engine.model_path = Some(path.to_path_buf());
        engine
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut engine = Self::with_tokenizer(TextTokenizer::new(config.tokenizer.lowercase));
        if let Some(path) = &config.model.path {
            engine.model = load_or_new(path);
            engine.model_path = Some(path.clone());
        }
        engine
    }
}

impl Default for ClassifierEngine<TextTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> ClassifierEngine<T> {
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            model: NaiveBayesModel::new(),
            tokenizer,
            learning_engine: LearningEngine::new(),
            model_path: None,
        }
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    /// Learns one raw document. An empty category is ignored.
    pub fn train(&mut self, document: &str, category: &str) {
        let example = TrainingExample::new(document, category);
        self.learning_engine
            .learn(&mut self.model, &self.tokenizer, &example);
    }

    pub fn train_batch(&mut self, examples: &[TrainingExample]) -> usize {
        self.learning_engine
            .learn_batch(&mut self.model, &self.tokenizer, examples)
    }

    /// Predicts a category for the document, or `None` if nothing has been
    /// learned yet.
    pub fn classify(&self, document: &str) -> Option<Category> {
        self.model.classify(&self.tokenizer.tokenize(document))
    }

    pub fn classify_scored(&self, document: &str) -> Option<Prediction> {
        self.model.classify_scored(&self.tokenizer.tokenize(document))
    }

    pub fn scores(&self, document: &str) -> Vec<Prediction> {
        self.model.scores(&self.tokenizer.tokenize(document))
    }

    pub fn save_model(&self) -> Result<()> {
        if let Some(path) = &self.model_path {
            save_to_disk(&self.model, path)
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}

fn load_or_new(path: &Path) -> NaiveBayesModel {
    match load_from_disk(path) {
        Ok(model) => model,
        Err(ClassifierError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no saved model, starting fresh");
            NaiveBayesModel::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load model, starting fresh");
            NaiveBayesModel::new()
        }
    }
}
