// src/tokenizer.rs
//! Twitter-aware lexical scanner.
//!
//! The scanner is one composite regex built from an ordered list of lexical
//! categories. At every position the earliest listed category that matches
//! wins, so the order of [`PatternCategory::ALL`] is load-bearing:
//!
//! - phone numbers come first because they may contain whitespace;
//! - emoticons come before markup tags, so `<:| text >:)` yields two emoticons
//!   rather than one tag;
//! - the single non-space symbol is last and guarantees forward progress.
//!
//! Whitespace is never emitted. Case folding (when enabled) is a second pass
//! that lowercases every token except those that look like an emoticon.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::TokenizeError;

// Eyes, optional nose, mouth (or mirrored), plus the heart.
const EMOTICON: &str = concat!(
    r"(?:",
    r"[<>]?[:;=8][\-o\*']?[\)\]\(\[dDpP/:\}\{@\|\\]",
    r"|",
    r"[\)\]\(\[dDpP/:\}\{@\|\\][\-o\*']?[:;=8][<>]?",
    r"|",
    r"<3",
    r")"
);

// (international) (area code) exchange base
const PHONE: &str = concat!(
    r"(?:\+?[01][\-\s.]*)?",
    r"(?:[(]?\d{3}[\-\s.)]*)?",
    r"\d{3}[\-\s.]*\d{4}"
);

/// Lexical categories in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Phone,
    Emoticon,
    Tag,
    Mention,
    Hashtag,
    /// Words with inner apostrophes or dashes (`don't`, `co-op`).
    ApostropheWord,
    /// Fractions, decimals, times, signed numbers.
    Number,
    Word,
    Ellipsis,
    /// Any other single non-whitespace character.
    Symbol,
}

impl PatternCategory {
    /// Every category, earliest first. The composite scanner is built from this list.
    pub const ALL: [PatternCategory; 10] = [
        PatternCategory::Phone,
        PatternCategory::Emoticon,
        PatternCategory::Tag,
        PatternCategory::Mention,
        PatternCategory::Hashtag,
        PatternCategory::ApostropheWord,
        PatternCategory::Number,
        PatternCategory::Word,
        PatternCategory::Ellipsis,
        PatternCategory::Symbol,
    ];

    /// Regex fragment for this category (no flags, no capture groups).
    pub fn pattern(self) -> &'static str {
        match self {
            PatternCategory::Phone => PHONE,
            PatternCategory::Emoticon => EMOTICON,
            PatternCategory::Tag => r"<[^>]+>",
            PatternCategory::Mention => r"@\w+",
            PatternCategory::Hashtag => r"#+\w+[\w'\-]*\w+",
            PatternCategory::ApostropheWord => r"[a-z][a-z'\-_]+[a-z]",
            PatternCategory::Number => r"[+\-]?\d+[,/.:\-]\d+[+\-]?",
            PatternCategory::Word => r"\w+",
            PatternCategory::Ellipsis => r"\.(?:\s*\.)+",
            PatternCategory::Symbol => r"\S",
        }
    }

    fn group_name(self) -> &'static str {
        match self {
            PatternCategory::Phone => "phone",
            PatternCategory::Emoticon => "emoticon",
            PatternCategory::Tag => "tag",
            PatternCategory::Mention => "mention",
            PatternCategory::Hashtag => "hashtag",
            PatternCategory::ApostropheWord => "apostrophe_word",
            PatternCategory::Number => "number",
            PatternCategory::Word => "word",
            PatternCategory::Ellipsis => "ellipsis",
            PatternCategory::Symbol => "symbol",
        }
    }
}

/// Ordered alternation of all categories. Rust's regex uses leftmost-first
/// semantics for alternations, which gives "first listed category wins".
fn composite_pattern() -> String {
    let alternatives: Vec<String> = PatternCategory::ALL
        .iter()
        .map(|c| format!("(?P<{}>{})", c.group_name(), c.pattern()))
        .collect();
    format!("(?i){}", alternatives.join("|"))
}

static SCANNER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&composite_pattern()).expect("scanner regex"));

static EMOTICON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i){EMOTICON}")).expect("emoticon regex"));

/// True if the token contains an emoticon shape anywhere.
///
/// This is independent of which category produced the token, so a tag like
/// `<A:P>` is still protected from lowercasing.
pub fn looks_like_emoticon(token: &str) -> bool {
    EMOTICON_RE.is_match(token)
}

/// A scanned token with its category and byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    pub text: String,
    pub category: PatternCategory,
    pub start: usize,
    pub end: usize,
    pub index: usize, // 0-based token index in the sequence
}

/// Scanner configured with a case policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    preserve_case: bool,
}

impl Tokenizer {
    pub fn new(preserve_case: bool) -> Self {
        Self { preserve_case }
    }

    pub fn preserve_case(&self) -> bool {
        self.preserve_case
    }

    /// Split `text` into tokens, left to right. Never fails on text.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        SCANNER_RE
            .find_iter(text)
            .map(|m| self.fold(m.as_str()))
            .collect()
    }

    /// Tokenize a JSON value; anything other than a string is an
    /// [`TokenizeError::InputType`].
    pub fn tokenize_value(&self, value: &Value) -> Result<Vec<String>, TokenizeError> {
        match value {
            Value::String(s) => Ok(self.tokenize(s)),
            other => Err(TokenizeError::input_type(other)),
        }
    }

    /// Same matching as [`Tokenizer::tokenize`], keeping the category and span
    /// of every match. No case folding is applied.
    pub fn scan(&self, text: &str) -> Vec<Lexeme> {
        let mut out = Vec::new();
        for caps in SCANNER_RE.captures_iter(text) {
            let hit = PatternCategory::ALL
                .iter()
                .find_map(|c| caps.name(c.group_name()).map(|m| (*c, m)));
            if let Some((category, m)) = hit {
                out.push(Lexeme {
                    text: m.as_str().to_string(),
                    category,
                    start: m.start(),
                    end: m.end(),
                    index: out.len(),
                });
            }
        }
        out
    }

    fn fold(&self, token: &str) -> String {
        if self.preserve_case || looks_like_emoticon(token) {
            token.to_string()
        } else {
            token.to_lowercase()
        }
    }
}

/// Convenience wrapper around [`Tokenizer::tokenize`].
pub fn tokenize(text: &str, preserve_case: bool) -> Vec<String> {
    Tokenizer::new(preserve_case).tokenize(text)
}
