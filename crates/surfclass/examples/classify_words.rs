//! Classify a few boundary words and print the full report.
//!
//! Usage:
//!   cargo run -p surfclass --example classify_words
//!   cargo run -p surfclass --example classify_words -- "a b a^-1 b^-1 c c"

use surfclass::classify_word;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let words = if args.is_empty() {
        vec![
            "a a^-1".to_string(),
            "a a".to_string(),
            "a b a^-1 b^-1".to_string(),
            "a b a b^-1".to_string(),
            "a b a^-1 b^-1 c c".to_string(),
        ]
    } else {
        args
    };
    for w in words {
        match classify_word(&w) {
            Ok(r) => println!(
                "{w:<24} {} | genus={} orientable={} π₁={} H={}",
                r.name, r.genus, r.orientable, r.fundamental_group, r.homology
            ),
            Err(e) => eprintln!("{w:<24} error: {e}"),
        }
    }
}
