//! Property tests for append and resolve ordering guarantees

use chrono::NaiveDate;
use proptest::prelude::*;
use statelog_core::{apply_append, apply_resolve, Field, StateDocument};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
}

fn appendable_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Decisions),
        Just(Field::Built),
        Just(Field::OpenQuestions),
        Just(Field::KeyFiles),
        Just(Field::Context),
    ]
}

proptest! {
    #[test]
    fn append_adds_exactly_one_entry_at_the_end(
        existing in proptest::collection::vec(".*", 0..8),
        field in appendable_field(),
        text in ".*",
    ) {
        let mut doc = StateDocument::new();
        for e in &existing {
            apply_append(&mut doc, field, e, day()).unwrap();
        }
        let before = doc.entries(field).to_vec();
        let others: Vec<Vec<String>> = Field::ALL
            .iter()
            .filter(|f| **f != field)
            .map(|f| doc.entries(*f).to_vec())
            .collect();

        apply_append(&mut doc, field, &text, day()).unwrap();

        let after = doc.entries(field);
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert!(after[before.len()].starts_with("2026-02-14 - "));
        prop_assert!(after[before.len()].ends_with(text.as_str()));

        let others_after: Vec<Vec<String>> = Field::ALL
            .iter()
            .filter(|f| **f != field)
            .map(|f| doc.entries(*f).to_vec())
            .collect();
        prop_assert_eq!(others, others_after);
    }

    #[test]
    fn resolve_moves_exactly_the_matching_questions(
        questions in proptest::collection::vec("[a-d ]{0,12}", 0..10),
        keyword in "[a-d]{1,2}",
    ) {
        let mut doc = StateDocument {
            open_questions: questions.clone(),
            ..StateDocument::new()
        };

        let outcome = apply_resolve(&mut doc, &keyword, "done", day()).unwrap();

        let expected_open: Vec<String> =
            questions.iter().filter(|q| !q.contains(&keyword)).cloned().collect();
        let expected_matched: Vec<String> =
            questions.iter().filter(|q| q.contains(&keyword)).cloned().collect();

        prop_assert_eq!(&doc.open_questions, &expected_open);
        prop_assert_eq!(doc.resolved.len(), expected_matched.len());
        prop_assert_eq!(
            outcome.resolved.iter().map(|r| r.question.clone()).collect::<Vec<_>>(),
            expected_matched
        );
        // Every question lost from open_questions reappears in resolved
        prop_assert_eq!(
            doc.open_questions.len() + doc.resolved.len(),
            questions.len()
        );
        prop_assert!(doc.decisions.is_empty() && doc.built.is_empty());
    }
}
