//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LISTS: &[(&str, &str, &str)] = &[
    (
        "data/dictionary5.txt",
        "DICTIONARY_FIVE",
        "Curated five-letter dictionary words",
    ),
    (
        "data/dictionary4.txt",
        "DICTIONARY_FOUR",
        "Curated four-letter dictionary words",
    ),
    ("data/classic.txt", "CLASSIC", "Classic mode solutions"),
    ("data/speed.txt", "SPEED", "Speed mode solutions"),
    ("data/hard.txt", "HARD", "Hard mode solutions"),
    ("data/chain.txt", "CHAIN", "Chain mode solutions"),
    ("data/backwards.txt", "BACKWARDS", "Backwards mode solutions"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    for &(input, const_name, doc_comment) in WORD_LISTS {
        generate_word_list(
            input,
            &out_dir.join(format!("{}.rs", const_name.to_lowercase())),
            const_name,
            doc_comment,
        );
        println!("cargo:rerun-if-changed={input}");
    }

    generate_pair_list(
        "data/double.txt",
        &out_dir.join("double_pairs.rs"),
        "DOUBLE_PAIRS",
        "Double mode word pairs as (first, second, relation)",
    );
    generate_pair_list(
        "data/crosswordle.txt",
        &out_dir.join("crosswordle_puzzles.rs"),
        "CROSSWORDLE_PUZZLES",
        "Crosswordle puzzles as (id, horizontal, vertical, relation)",
    );

    println!("cargo:rerun-if-changed=data/double.txt");
    println!("cargo:rerun-if-changed=data/crosswordle.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

/// Pipe-separated records; every field is emitted as a string literal, so the
/// crosswordle id column is parsed back at load time.
fn generate_pair_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split('|').map(str::trim).collect())
        .collect();

    let width = records.first().map_or(0, Vec::len);
    for record in &records {
        assert_eq!(
            record.len(),
            width,
            "Inconsistent field count in {input_path}: {record:?}"
        );
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let tuple_type = vec!["&str"; width].join(", ");

    writeln!(output, "// Generated puzzle list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[({tuple_type})] = &[").unwrap();

    for record in records {
        let fields: Vec<String> = record.iter().map(|field| format!("{field:?}")).collect();
        writeln!(output, "    ({}),", fields.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
}
