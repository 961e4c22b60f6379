// tests/tokenize_examples.rs
// End-to-end examples for the scanner + negation tagger, plus seeded
// randomized checks of the structural invariants.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tweet_tokenizer::tokenizer::Lexeme;
use tweet_tokenizer::{
    add_negation_suffixes, looks_like_emoticon, tokenize, PatternCategory, Tokenizer,
};

const ALPHABET: &[char] = &[
    'a', 'b', 'D', 'P', 'n', 'o', 't', '\'', '-', '_', '0', '1', '5', '7', '(', ')', ':', ';',
    '=', '8', '<', '>', '@', '#', '.', ',', '!', '?', '/', '+', ' ', ' ', ' ', '\t', '\n', 'é',
];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..60);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn scan_then_tag_a_tweet() {
    let toks = tokenize("I don't like it.", false);
    assert_eq!(toks, vec!["i", "don't", "like", "it", "."]);
    assert_eq!(
        add_negation_suffixes(&toks),
        vec!["i", "don't", "like_NEG", "it_NEG", "."]
    );
}

#[test]
fn realistic_tweet() {
    let toks = tokenize(
        "@SteveJ Can't believe the new phone... NOT worth $999 :( #fail http://t.co/x",
        false,
    );
    assert_eq!(
        toks,
        vec![
            "@stevej", "can't", "believe", "the", "new", "phone", "...", "not", "worth", "$",
            "999", ":(", "#fail", "http", ":/", "/", "t", ".", "co", "/", "x",
        ]
    );
    let tagged = add_negation_suffixes(&toks);
    assert_eq!(tagged[2], "believe_NEG");
    assert_eq!(tagged[6], "..._NEG");
    assert_eq!(tagged[7], "not_NEG");
    assert_eq!(tagged[11], ":(_NEG");
    // ":/" is not clause punctuation, "." is.
    assert_eq!(tagged[16], "t_NEG");
    assert_eq!(tagged[17], ".");
    assert_eq!(tagged[18], "co");
}

#[test]
fn whitespace_only_inside_phone_ellipsis_or_tag() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let t = Tokenizer::new(true);
    for _ in 0..500 {
        let text = random_text(&mut rng);
        for Lexeme { text: tok, category, .. } in t.scan(&text) {
            if tok.chars().any(char::is_whitespace) {
                assert!(
                    matches!(
                        category,
                        PatternCategory::Phone | PatternCategory::Ellipsis | PatternCategory::Tag
                    ),
                    "{tok:?} ({category:?}) from {text:?}"
                );
            }
        }
    }
}

#[test]
fn scan_and_tokenize_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let t = Tokenizer::new(true);
    for _ in 0..500 {
        let text = random_text(&mut rng);
        let scanned: Vec<String> = t.scan(&text).into_iter().map(|l| l.text).collect();
        assert_eq!(scanned, t.tokenize(&text), "text: {text:?}");
    }
}

#[test]
fn case_folding_is_per_token_with_emoticon_guard() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let text = random_text(&mut rng);
        let kept = tokenize(&text, true);
        let folded = tokenize(&text, false);
        assert_eq!(kept.len(), folded.len());
        for (k, f) in kept.iter().zip(&folded) {
            if looks_like_emoticon(k) {
                assert_eq!(k, f);
            } else {
                assert_eq!(&k.to_lowercase(), f);
            }
        }

        let lower = text.to_ascii_lowercase();
        assert_eq!(tokenize(&lower, false), tokenize(&lower, true));
    }
}

#[test]
fn tagging_is_length_preserving_on_scanned_text() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let toks = tokenize(&random_text(&mut rng), false);
        assert_eq!(add_negation_suffixes(&toks).len(), toks.len());
    }
}
