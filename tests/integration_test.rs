//! Integration tests for the transaction report CLI.
//!
//! These tests run the actual binary and check the report it prints.

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with no arguments and return stdout
fn run_report() -> String {
    let mut cmd = Command::cargo_bin("transaction-report").unwrap();
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Lines that follow `label`, up to the next blank line
fn section_lines(output: &str, label: &str) -> Vec<String> {
    output
        .lines()
        .skip_while(|l| *l != label)
        .skip(1)
        .take_while(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_labels_appear_in_order() {
    let output = run_report();
    let labels = [
        "Transactions:",
        "Bills:",
        "Big Transactions:",
        "Transaction Names:",
        "Formatted Transactions 2:",
        "Amounts:",
        "Sorted Low to High:",
        "Sorted High to Low:",
        "Sorted Alphabetically:",
        "Sorted Alphabetically 2:",
    ];

    let positions: Vec<usize> = labels
        .iter()
        .map(|label| {
            output
                .lines()
                .position(|l| l == *label)
                .unwrap_or_else(|| panic!("missing label {}", label))
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_base_sequence_table() {
    let output = run_report();
    assert_eq!(
        section_lines(&output, "Transactions:"),
        vec![
            "id,name,amount,category",
            "1,ALice,50,Bills",
            "2,Bob,40,entertainment",
            "3,Jessica,70,groceries",
            "4,Michael,30,transport",
            "5,Sarah,90,Shopping",
        ]
    );
}

#[test]
fn test_bills_and_big_transactions() {
    let output = run_report();
    assert_eq!(
        section_lines(&output, "Bills:"),
        vec!["id,name,amount,category", "1,ALice,50,Bills"]
    );
    assert_eq!(
        section_lines(&output, "Big Transactions:"),
        vec![
            "id,name,amount,category",
            "3,Jessica,70,groceries",
            "5,Sarah,90,Shopping",
        ]
    );
}

#[test]
fn test_projections() {
    let output = run_report();
    assert_eq!(
        section_lines(&output, "Transaction Names:"),
        vec![r#"["ALice", "Bob", "Jessica", "Michael", "Sarah"]"#]
    );
    assert_eq!(
        section_lines(&output, "Amounts:"),
        vec!["[50, 40, 70, 30, 90]"]
    );
}

#[test]
fn test_formatted_transactions_keep_padding() {
    let output = run_report();
    let lines = section_lines(&output, "Formatted Transactions 2:");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#"" Bob spent $40 on entertainment ""#));
    assert!(lines[0].contains(r#"" ALice spent $50 on Bills ""#));
}

#[test]
fn test_sorted_sections() {
    let output = run_report();
    let names = |label: &str| -> Vec<String> {
        section_lines(&output, label)
            .iter()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap().to_string())
            .collect()
    };

    assert_eq!(
        names("Sorted Low to High:"),
        vec!["Michael", "Bob", "ALice", "Jessica", "Sarah"]
    );
    assert_eq!(
        names("Sorted High to Low:"),
        vec!["Sarah", "Jessica", "ALice", "Bob", "Michael"]
    );
    assert_eq!(
        names("Sorted Alphabetically:"),
        vec!["ALice", "Bob", "Jessica", "Michael", "Sarah"]
    );
}

#[test]
fn test_sorted_names_keep_projection_order() {
    let output = run_report();
    assert_eq!(
        section_lines(&output, "Sorted Alphabetically 2:"),
        section_lines(&output, "Transaction Names:")
    );
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(run_report(), run_report());
}

#[test]
fn test_unexpected_argument_error() {
    let mut cmd = Command::cargo_bin("transaction-report").unwrap();
    cmd.arg("transactions.csv")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unexpected argument 'transactions.csv'"));
}

#[test]
fn test_logs_go_to_stderr() {
    let mut cmd = Command::cargo_bin("transaction-report").unwrap();
    cmd.env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Transactions:\n"))
        .stderr(predicate::str::contains("Generating report"));
}
