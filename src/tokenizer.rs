// File: src/tokenizer.rs
use crate::core::types::Token;

/// Splits a raw document into normalized word tokens.
///
/// The model never sees raw text, so any analyzer can be plugged in here,
/// including plain closures.
pub trait Tokenizer {
    fn tokenize(&self, document: &str) -> Vec<Token>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<Token>,
{
    fn tokenize(&self, document: &str) -> Vec<Token> {
        self(document)
    }
}

/// Splits on every character that is not alphanumeric.
/// Lower-cases tokens unless told otherwise.
#[derive(Debug, Clone)]
pub struct TextTokenizer {
    lowercase: bool,
}

impl TextTokenizer {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }
}

impl Default for TextTokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer for TextTokenizer {
    fn tokenize(&self, document: &str) -> Vec<Token> {
        document
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }
}
