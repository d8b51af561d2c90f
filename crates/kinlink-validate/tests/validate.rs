//! Integration tests for the validation chain.

use kinlink_model::{MemoryLog, PersonKey, RawRecord};
use kinlink_validate::{FieldValidator, Stage, ValidationOptions};

fn make_record(first: &str, last: &str, email: &str) -> RawRecord {
    RawRecord::from([
        first,
        last,
        "Acme Inc",
        "1 Main St",
        "Springfield",
        "Greene",
        "MO",
        "65801",
        "555-0100",
        email,
    ])
}

fn clean(records: Vec<RawRecord>) -> Vec<PersonKey> {
    FieldValidator::default().clean(records, &MemoryLog::new())
}

#[test]
fn test_valid_record_is_kept() {
    let people = clean(vec![make_record("Ann", "Smith-Jones", "ann@example.com")]);
    assert_eq!(people, vec![PersonKey::new("Ann", "Smith-Jones")]);
}

#[test]
fn test_blank_fields_are_rejected() {
    let people = clean(vec![
        make_record("Ann", "", "ann@example.com"),
        make_record("", "Lee", "lee@example.com"),
        make_record("Bob", "Lee", ""),
    ]);
    assert!(people.is_empty());
}

#[test]
fn test_names_without_letters_are_rejected() {
    let people = clean(vec![
        make_record("1234", "Lee", "a@example.com"),
        make_record("Ann", "--", "b@example.com"),
        make_record("Ann", "   ", "c@example.com"),
    ]);
    assert!(people.is_empty());
}

#[test]
fn test_names_with_other_characters_are_rejected() {
    let people = clean(vec![
        make_record("Ann", "O'Brien", "a@example.com"),
        make_record("Ann2", "Lee", "b@example.com"),
        make_record("Zoë", "Lee", "c@example.com"),
        make_record("Mary Ann", "Lee-Park", "d@example.com"),
    ]);
    assert_eq!(people, vec![PersonKey::new("Mary Ann", "Lee-Park")]);
}

#[test]
fn test_long_email_local_part_is_rejected() {
    let local_64 = format!("{}@example.com", "a".repeat(64));
    let local_65 = format!("{}@example.com", "a".repeat(65));
    let people = clean(vec![
        make_record("Ann", "Lee", &local_64),
        make_record("Bob", "Lee", &local_65),
    ]);
    assert_eq!(people, vec![PersonKey::new("Ann", "Lee")]);
}

#[test]
fn test_malformed_email_is_rejected() {
    let people = clean(vec![
        make_record("Ann", "Lee", "ann.example.com"),
        make_record("Bob", "Lee", "bob@"),
    ]);
    assert!(people.is_empty());
}

#[test]
fn test_field_length_limit_applies_to_every_field() {
    let long_city = "x".repeat(257);
    let limit_city = "x".repeat(256);
    let mut over = make_record("Ann", "Lee", "ann@example.com").fields().to_vec();
    over[4] = long_city;
    let mut at = make_record("Bob", "Lee", "bob@example.com").fields().to_vec();
    at[4] = limit_city;

    let people = clean(vec![RawRecord::new(over), RawRecord::new(at)]);

    assert_eq!(people, vec![PersonKey::new("Bob", "Lee")]);
}

#[test]
fn test_field_length_limit_is_configurable() {
    let validator = FieldValidator::new(ValidationOptions::new().with_max_field_len(6));
    let people = validator.clean(
        vec![
            RawRecord::from(["Ann", "Lee", "", "", "", "", "", "", "", "a@b.co"]),
            make_record("Bob", "Lee", "bob@example.com"),
        ],
        &MemoryLog::new(),
    );
    assert_eq!(people, vec![PersonKey::new("Ann", "Lee")]);
}

#[test]
fn test_short_record_is_skipped_not_fatal() {
    let cleaned = FieldValidator::default().clean_with_report(
        vec![
            RawRecord::from(["Ann", "Lee", "ann@example.com"]),
            make_record("Bob", "Lee", "bob@example.com"),
        ],
        &MemoryLog::new(),
    );
    assert_eq!(cleaned.people, vec![PersonKey::new("Bob", "Lee")]);
    assert_eq!(cleaned.report.malformed, 1);
    assert_eq!(cleaned.report.stage(Stage::Projection).unwrap().kept, 1);
}

#[test]
fn test_order_and_duplicates_are_preserved() {
    let people = clean(vec![
        make_record("Cy", "Park", "cy@example.com"),
        make_record("Ann", "Lee", "ann@example.com"),
        make_record("Cy", "Park", "cy2@example.com"),
    ]);
    assert_eq!(
        people,
        vec![
            PersonKey::new("Cy", "Park"),
            PersonKey::new("Ann", "Lee"),
            PersonKey::new("Cy", "Park"),
        ]
    );
}

#[test]
fn test_empty_input() {
    let cleaned = FieldValidator::default().clean_with_report(Vec::new(), &MemoryLog::new());
    assert!(cleaned.people.is_empty());
    assert_eq!(cleaned.report.stages.len(), Stage::ALL.len());
    assert_eq!(cleaned.report.kept_count(), 0);
}
