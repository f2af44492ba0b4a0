//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use proptest::prelude::*;

#[derive(Clone)]
struct Draft {
    title: String,
    body: String,
}

fn draft_rules() -> RuleSet<Draft> {
    RuleSet::<Draft>::new()
        .min_length("title", |d: &Draft| d.title.clone(), 3)
        .max_length("title", |d: &Draft| d.title.clone(), 10)
        .not_empty_text("body", |d: &Draft| d.body.clone())
}

// ============================================================================
// IDEMPOTENCY: evaluating the same target twice gives the same outcome
// ============================================================================

proptest! {
    #[test]
    fn min_length_idempotent(s in ".*") {
        let mut rule = MinLength::new("s", 3);
        rule.evaluate_target(s.clone());
        let first = rule.failures().to_vec();
        rule.evaluate_target(s);
        prop_assert_eq!(rule.failures(), &first[..]);
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let mut rule = Email::new("s");
        rule.evaluate_target(s.clone());
        let first = rule.is_valid();
        rule.evaluate_target(s);
        prop_assert_eq!(rule.is_valid(), first);
    }

    #[test]
    fn leaf_failure_count_is_zero_or_one(s in ".*") {
        let mut rule = MaxLength::new("s", 5);
        rule.evaluate_target(s);
        prop_assert!(rule.failures().len() <= 1);
    }
}

// ============================================================================
// ENGINE INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn round_trip_reproduces_failures(title in ".{0,20}", body in ".{0,20}") {
        let mut rules = draft_rules();
        let original = Draft { title: title.clone(), body: body.clone() };
        let other = Draft { title: body, body: title };

        rules.evaluate_target(original.clone());
        let first = rules.failures().to_vec();

        rules.evaluate_target(other);
        rules.evaluate_target(original);
        prop_assert_eq!(rules.failures(), &first[..]);
    }

    #[test]
    fn failure_order_follows_binding_order(title in ".{0,20}", body in ".{0,20}") {
        let mut rules = draft_rules();
        rules.evaluate_target(Draft { title, body });

        // Failures must be a subsequence of the binding-order group list.
        let binding_order = ["title", "title", "body"];
        let mut cursor = 0;
        for failure in rules.failures() {
            let position = binding_order[cursor..]
                .iter()
                .position(|g| *g == failure.group_name());
            prop_assert!(position.is_some(), "failure out of binding order");
            cursor += position.unwrap() + 1;
        }
    }

    #[test]
    fn partial_update_never_touches_other_groups(title in ".{0,20}", candidate in ".{0,20}") {
        let mut rules = draft_rules();
        rules.evaluate_target(Draft { title, body: String::new() });

        let body_failures_before: Vec<Failure> = rules
            .failures()
            .iter()
            .filter(|f| f.group_name() == "body")
            .cloned()
            .collect();

        rules.evaluate_group_value("title", candidate).unwrap();

        let body_failures_after: Vec<Failure> = rules
            .failures()
            .iter()
            .filter(|f| f.group_name() == "body")
            .cloned()
            .collect();
        prop_assert_eq!(body_failures_before, body_failures_after);
    }

    #[test]
    fn grouped_and_full_evaluation_agree(title in ".{0,20}", body in ".{0,20}") {
        let mut full = draft_rules();
        full.evaluate_target(Draft { title: title.clone(), body: body.clone() });

        let mut partial = draft_rules();
        partial.evaluate_target(Draft { title: title.clone(), body: body.clone() });
        partial.evaluate_group("title").unwrap();
        partial.evaluate_group("body").unwrap();

        // Re-running a group moves its failures to the end of the list, so
        // compare the two outcomes group-insensitively.
        let mut full_keys: Vec<(String, String)> = full
            .failures()
            .iter()
            .map(|f| (f.group_name().to_owned(), f.code().to_owned()))
            .collect();
        let mut partial_keys: Vec<(String, String)> = partial
            .failures()
            .iter()
            .map(|f| (f.group_name().to_owned(), f.code().to_owned()))
            .collect();
        full_keys.sort();
        partial_keys.sort();
        prop_assert_eq!(full_keys, partial_keys);
    }
}
