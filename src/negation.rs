// src/negation.rs
//! Negation marking for tokenized text.
//!
//! Appends [`NEGATION_SUFFIX`] to every token between a negation cue and the
//! next clause-level punctuation token (Das & Chen 2001; Pang, Lee &
//! Vaithyanathan 2002). The pass is a two-state machine run once, left to
//! right, starting `Clear` on every call.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NEGATION_SUFFIX: &str = "_NEG";

// Whole-token negation words, or "n't" anywhere in the token.
static NEGATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:never|no|nothing|nowhere|noone|none|not|",
        r"havent|hasnt|hadnt|cant|couldnt|shouldnt|",
        r"wont|wouldnt|dont|doesnt|didnt|isnt|arent|aint)$",
        r"|n't"
    ))
    .expect("negation regex")
});

static CLAUSE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.:;!?]$").expect("clause punctuation regex"));

/// Token opens (or continues) a negated span for the tokens after it.
pub fn is_negation_cue(token: &str) -> bool {
    NEGATION_RE.is_match(token)
}

/// Token ends any negated span, itself included.
pub fn is_clause_punctuation(token: &str) -> bool {
    CLAUSE_PUNCT_RE.is_match(token)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NegationState {
    #[default]
    Clear,
    Negated,
}

impl NegationState {
    /// Consume one token. Returns whether this token is suffixed and the
    /// state for the next token.
    ///
    /// Punctuation clears before the token's own decision; a cue only affects
    /// the tokens after it.
    pub fn step(self, token: &str) -> (bool, NegationState) {
        let current = if is_clause_punctuation(token) {
            NegationState::Clear
        } else {
            self
        };
        let suffix = current == NegationState::Negated;
        let next = if is_negation_cue(token) {
            NegationState::Negated
        } else {
            current
        };
        (suffix, next)
    }
}

/// Per-token negation flags, same length as `tokens`.
pub fn negation_mask<S: AsRef<str>>(tokens: &[S]) -> Vec<bool> {
    let mut state = NegationState::Clear;
    tokens
        .iter()
        .map(|t| {
            let (suffix, next) = state.step(t.as_ref());
            state = next;
            suffix
        })
        .collect()
}

/// Return a copy of `tokens` with [`NEGATION_SUFFIX`] appended inside negated spans.
pub fn add_negation_suffixes<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .zip(negation_mask(tokens))
        .map(|(t, negated)| {
            let t = t.as_ref();
            if negated {
                format!("{t}{NEGATION_SUFFIX}")
            } else {
                t.to_string()
            }
        })
        .collect()
}
