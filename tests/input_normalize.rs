// tests/input_normalize.rs
use tweet_tokenizer::normalize::{decode_html_entities, decode_input, decode_input_strict};
use tweet_tokenizer::{tokenize, TokenizeError};

#[test]
fn empty_is_ok() {
    assert_eq!(decode_input(b""), "");
    assert!(tokenize(&decode_input(b""), false).is_empty());
}

#[test]
fn escaped_bytes_still_tokenize() {
    let text = decode_input(b"caf\xe9 :)");
    assert_eq!(text, "caf\\xe9 :)");
    assert_eq!(tokenize(&text, false), vec!["caf", "\\", "xe9", ":)"]);
}

#[test]
fn strict_decode_surfaces_error() {
    assert_eq!(
        decode_input_strict(b"\xff"),
        Err(TokenizeError::Decode { valid_up_to: 0 })
    );
}

#[test]
fn entities_then_tokens() {
    let s = decode_html_entities("I &lt;3 it &#33;");
    assert_eq!(tokenize(&s, true), vec!["I", "<3", "it", "!"]);
}
