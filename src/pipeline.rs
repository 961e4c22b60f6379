// src/pipeline.rs
//! Text → tokens → negation-marked tokens, as configured.

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::debug;

use crate::config::TokenizerConfig;
use crate::error::TokenizeError;
use crate::negation::{negation_mask, NEGATION_SUFFIX};
use crate::normalize::decode_html_entities;
use crate::tokenizer::Tokenizer;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("tokenizer_texts_total", "Texts tokenized.");
        describe_counter!("tokenizer_tokens_total", "Tokens emitted.");
        describe_counter!(
            "tokenizer_negated_tokens_total",
            "Tokens suffixed as negated."
        );
        describe_counter!(
            "tokenizer_input_errors_total",
            "Inputs rejected because they were not text."
        );
    });
}

/// Short anonymized id for logs; raw text is never logged.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    tokenizer: Tokenizer,
    decode_html_entities: bool,
    mark_negation: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

impl Pipeline {
    pub fn new(cfg: &TokenizerConfig) -> Self {
        ensure_metrics_described();
        Self {
            tokenizer: Tokenizer::new(cfg.preserve_case),
            decode_html_entities: cfg.decode_html_entities,
            mark_negation: cfg.mark_negation,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn process(&self, text: &str) -> Vec<String> {
        let source = if self.decode_html_entities {
            decode_html_entities(text)
        } else {
            text.into()
        };
        let tokens = self.tokenizer.tokenize(&source);

        let (tokens, negated) = if self.mark_negation {
            let mask = negation_mask(&tokens);
            let negated = mask.iter().filter(|m| **m).count();
            let marked: Vec<String> = tokens
                .into_iter()
                .zip(mask)
                .map(|(mut t, neg)| {
                    if neg {
                        t.push_str(NEGATION_SUFFIX);
                    }
                    t
                })
                .collect();
            (marked, negated)
        } else {
            (tokens, 0)
        };

        counter!("tokenizer_texts_total").increment(1);
        counter!("tokenizer_tokens_total").increment(tokens.len() as u64);
        counter!("tokenizer_negated_tokens_total").increment(negated as u64);
        debug!(
            id = %anon_hash(text),
            tokens = tokens.len(),
            negated,
            "processed text"
        );

        tokens
    }

    /// Like [`Pipeline::process`], rejecting non-string values.
    pub fn process_value(&self, value: &Value) -> Result<Vec<String>, TokenizeError> {
        match value {
            Value::String(s) => Ok(self.process(s)),
            other => {
                counter!("tokenizer_input_errors_total").increment(1);
                Err(TokenizeError::input_type(other))
            }
        }
    }
}
