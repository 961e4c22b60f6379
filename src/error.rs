//! Error taxonomy for the tokenizer library.
//!
//! Tokenization itself never fails on text. The only caller-facing
//! condition is handing the scanner something that is not text; decoding
//! failures only surface through the strict input collaborator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The value passed to the scanner was not a string.
    #[error("tokenizer got {found}, expected string")]
    InputType { found: &'static str },

    /// Raw bytes could not be decoded as UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Decode { valid_up_to: usize },
}

impl TokenizeError {
    /// Build an `InputType` error naming the JSON type that was received.
    pub fn input_type(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self::InputType { found }
    }
}
