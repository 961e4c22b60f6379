// src/normalize.rs
//! Input collaborators that run before the scanner.
//!
//! The scanner only ever sees `&str`. These helpers turn raw bytes into text
//! and resolve HTML character references; neither is applied implicitly.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::error::TokenizeError;

/// Decode raw bytes, falling back to an escaped rendering when they are not
/// valid UTF-8 (printable ASCII kept, everything else as `\xNN`).
pub fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(e) => {
            tracing::debug!(valid_up_to = e.valid_up_to(), len = bytes.len(), "escaping non-UTF-8 input");
            Cow::Owned(escape_bytes(bytes))
        }
    }
}

/// Decode raw bytes or report where decoding failed.
pub fn decode_input_strict(bytes: &[u8]) -> Result<&str, TokenizeError> {
    std::str::from_utf8(bytes).map_err(|e| TokenizeError::Decode {
        valid_up_to: e.valid_up_to(),
    })
}

fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(b as char),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out
}

/// Resolve numeric (`&#65;`, `&#x41;`) and named (`&amp;`) character references.
pub fn decode_html_entities(s: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(s)
}
