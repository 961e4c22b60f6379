//! Tokenize stdin line by line and print one JSON array per line.
//!
//! A line is either a JSON object with a `text` field or raw text. Records
//! whose `text` is not a string print `null`.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use serde_json::Value;
use tweet_tokenizer::normalize::decode_input;
use tweet_tokenizer::{Pipeline, TokenizerConfig};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cfg = TokenizerConfig::load_default()?;
    let pipeline = Pipeline::new(&cfg);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = input.read_until(b'\n', &mut buf).context("reading stdin")?;
        if n == 0 {
            break;
        }
        line_no += 1;
        while matches!(buf.last().copied(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        let line = decode_input(&buf);

        let tokens = match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(record)) => {
                let text = record.get("text").unwrap_or(&Value::Null);
                match pipeline.process_value(text) {
                    Ok(t) => Some(t),
                    Err(e) => {
                        tracing::warn!(line = line_no, error = %e, "skipping record");
                        None
                    }
                }
            }
            _ => Some(pipeline.process(&line)),
        };

        serde_json::to_writer(&mut out, &tokens).context("writing tokens")?;
        out.write_all(b"\n").context("writing tokens")?;
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
