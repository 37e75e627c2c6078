use crate::{
    error::ErrorKind,
    model::record::SourceType,
    registry::MappingRegistry,
    test_fixtures::Order,
    validate::{mark_state_definer, mark_unique},
};
use proptest::{prelude::*, sample::subsequence};

const VALUE_FIELDS: [&str; 5] = [
    "order_number",
    "customer_id",
    "status",
    "cancel_reason",
    "total",
];

const REFERENCE_FIELDS: [&str; 3] = ["lines", "customer", "billing"];

fn order() -> SourceType {
    SourceType::of::<Order>()
}

// non-empty subset of value fields together with a permutation of it
fn arb_unique_set() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    subsequence(VALUE_FIELDS.to_vec(), 1..=VALUE_FIELDS.len())
        .prop_flat_map(|set| (Just(set.clone()), Just(set).prop_shuffle()))
}

fn arb_definer_calls() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(
        subsequence(REFERENCE_FIELDS.to_vec(), 1..=REFERENCE_FIELDS.len()).prop_shuffle(),
        0..6,
    )
}

proptest! {
    #[test]
    fn permuted_unique_set_is_a_duplicate((set, permuted) in arb_unique_set()) {
        let mut registry = MappingRegistry::new();

        prop_assert!(mark_unique(&mut registry, order(), &set).is_ok());
        let err = mark_unique(&mut registry, order(), &permuted).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::DuplicateConstraint);
        prop_assert_eq!(registry.unique_constraints().count(), 1);
    }

    #[test]
    fn distinct_unique_sets_all_register(
        sets in prop::collection::btree_set(
            subsequence(VALUE_FIELDS.to_vec(), 1..=VALUE_FIELDS.len()),
            1..8,
        )
    ) {
        let mut registry = MappingRegistry::new();

        for set in &sets {
            prop_assert!(mark_unique(&mut registry, order(), set).is_ok());
        }
        prop_assert_eq!(registry.unique_constraints().count(), sets.len());
    }

    #[test]
    fn state_definers_accumulate_without_repeats(calls in arb_definer_calls()) {
        let mut registry = MappingRegistry::new();
        let mut expected: Vec<&'static str> = Vec::new();

        for call in &calls {
            let overlaps = call.iter().any(|name| expected.contains(name));
            let result = mark_state_definer(&mut registry, order(), call);

            if overlaps {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::DuplicateConstraint);
            } else {
                prop_assert!(result.is_ok());
                expected.extend(call.iter().copied());
            }

            let current = registry
                .state_definer_for(order())
                .map(|props| props.field_names())
                .unwrap_or_default();
            prop_assert_eq!(&current, &expected);
        }
    }
}
