
use std::{fs, path::Path, thread};

use clause_diff::{
    DiffConfig, Error, Redactor, Side, compute_diff, get_diff_stats, try_compute_diff,
};
use clause_example::ClauseExample;
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[test]
fn test_clause_examples() {
    for example in &get_all_examples() {
        example.assert_eq(&compute_diff(example.original(), example.suggested()));
    }
}

#[test]
fn test_clause_examples_through_guard() {
    let config = DiffConfig::default();

    for example in &get_all_examples() {
        let diff = try_compute_diff(example.original(), example.suggested(), &config)
            .expect("Clause-sized input must be accepted");
        example.assert_eq(&diff);
    }
}

#[test]
fn test_stats_match_diff() {
    for example in &get_all_examples() {
        assert_eq!(
            get_diff_stats(example.original(), example.suggested()),
            compute_diff(example.original(), example.suggested()).stats()
        );
    }
}

#[test]
fn test_whole_document_is_rejected() {
    let document = "The Supplier shall deliver the Goods. ".repeat(1000);
    let config = DiffConfig::default();

    let result = try_compute_diff(&document, "The Supplier shall deliver.", &config);

    assert!(matches!(
        result,
        Err(Error::InputTooLarge {
            side: Side::Original,
            limit,
            ..
        }) if limit == config.max_tokens_per_side
    ));
}

#[test]
fn test_concurrent_callers() {
    let redactor = Redactor::legal().unwrap();
    let examples = get_all_examples();

    thread::scope(|scope| {
        for example in &examples {
            let redactor = &redactor;
            scope.spawn(move || {
                let diff = compute_diff(example.original(), example.suggested());
                example.assert_eq(&diff);

                let redacted = redactor.redact(example.original());
                assert_eq!(redacted.restore(redacted.text()), example.original());
            });
        }
    });
}

fn get_all_examples() -> Vec<ClauseExample> {
    let fixtures_dir = Path::new("tests/fixtures");
    let entries = fs::read_dir(fixtures_dir)
        .expect("Failed to read fixtures directory")
        .collect::<Vec<_>>();

    let mut examples = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open fixture file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let example =
                    ClauseExample::deserialize(document).expect("Failed to deserialize example");
                examples.push(example);
            }
        }
    }

    assert!(!examples.is_empty(), "No clause examples found");

    examples
}
