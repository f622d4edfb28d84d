//! Property-based tests for chain ordering laws using proptest.

use std::cmp::{Ordering, Reverse};

use lexord::{
    compare_using, desc, field, identity, make_compare, CaseInsensitive, Chain, Keyed, Natural,
    Number, Value,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
struct Rec {
    x: i8,
    active: bool,
    name: String,
}

// Small domains so ties on every key are common.
fn rec_strategy() -> impl Strategy<Value = Rec> {
    (-3i8..3, any::<bool>(), "[abAB]{0,3}").prop_map(|(x, active, name)| Rec { x, active, name })
}

fn full_chain() -> Chain<Rec> {
    make_compare!(
        field!(Rec, x),
        desc(field!(Rec, active)),
        compare_using(field(|r: &Rec| r.name.as_str()), CaseInsensitive),
    )
}

fn tail_chain() -> Chain<Rec> {
    make_compare!(
        desc(field!(Rec, active)),
        compare_using(field(|r: &Rec| r.name.as_str()), CaseInsensitive),
    )
}

fn tuple_key(r: &Rec) -> (i8, Reverse<bool>, String) {
    (r.x, Reverse(r.active), r.name.to_lowercase())
}

#[derive(Debug, Clone, Copy)]
struct Reading {
    v: Number,
}

impl Keyed for Reading {
    fn key_value(&self, field: &str) -> Value<'_> {
        match field {
            "v" => Value::Number(self.v),
            _ => Value::None,
        }
    }

    fn key_fields() -> &'static [&'static str] {
        &["v"]
    }
}

const TWO_53: i64 = 1 << 53;

// Mixed variants around the edges where float rounding and NaN live.
fn reading_strategy() -> impl Strategy<Value = Reading> {
    prop_oneof![
        (TWO_53 - 2..TWO_53 + 3).prop_map(Number::I64),
        (-3i64..3).prop_map(Number::I64),
        (0u64..3).prop_map(Number::U64),
        Just(Number::U64(u64::MAX)),
        (-3i32..3).prop_map(|n| Number::F64(f64::from(n) / 2.0)),
        Just(Number::F64(TWO_53 as f64)),
        Just(Number::F64(f64::NAN)),
        Just(Number::F64(f64::INFINITY)),
        Just(Number::F64(-0.0)),
    ]
    .prop_map(|v| Reading { v })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// No value precedes itself.
    #[test]
    fn irreflexive(a in rec_strategy()) {
        prop_assert!(!full_chain().precedes(&a, &a));
    }

    /// At most one direction of a pair holds.
    #[test]
    fn asymmetric(a in rec_strategy(), b in rec_strategy()) {
        let chain = full_chain();
        prop_assert!(!(chain.precedes(&a, &b) && chain.precedes(&b, &a)));
    }

    /// Precedence carries over through a middle value.
    #[test]
    fn transitive(a in rec_strategy(), b in rec_strategy(), c in rec_strategy()) {
        let chain = full_chain();
        if chain.precedes(&a, &b) && chain.precedes(&b, &c) {
            prop_assert!(chain.precedes(&a, &c));
        }
    }

    /// Equivalence (neither precedes) is itself transitive.
    #[test]
    fn equivalence_is_transitive(a in rec_strategy(), b in rec_strategy(), c in rec_strategy()) {
        let chain = full_chain();
        if chain.equivalent(&a, &b) && chain.equivalent(&b, &c) {
            prop_assert!(chain.equivalent(&a, &c));
        }
    }

    /// The first key that distinguishes a pair decides it.
    #[test]
    fn first_key_has_priority(a in rec_strategy(), b in rec_strategy()) {
        prop_assume!(a.x != b.x);
        prop_assert_eq!(full_chain().precedes(&a, &b), a.x < b.x);
    }

    /// A tie on the first key defers to the remaining keys.
    #[test]
    fn tie_falls_through(a in rec_strategy(), mut b in rec_strategy()) {
        b.x = a.x;
        prop_assert_eq!(full_chain().compare(&a, &b), tail_chain().compare(&a, &b));
    }

    /// The chain agrees with the equivalent tuple key.
    #[test]
    fn matches_tuple_key(a in rec_strategy(), b in rec_strategy()) {
        prop_assert_eq!(full_chain().compare(&a, &b), tuple_key(&a).cmp(&tuple_key(&b)));
    }

    /// A chain with no keys relates nothing.
    #[test]
    fn empty_chain_relates_nothing(a in rec_strategy(), b in rec_strategy()) {
        let chain: Chain<Rec> = make_compare!();
        prop_assert!(!chain.precedes(&a, &b));
        prop_assert_eq!(chain.compare(&a, &b), Ordering::Equal);
    }

    /// Nesting a chain as one key's relation behaves like splicing its keys in.
    #[test]
    fn nested_equals_flattened(a in rec_strategy(), b in rec_strategy()) {
        let nested = make_compare!(field!(Rec, x), compare_using(identity::<Rec>(), tail_chain()));
        prop_assert_eq!(nested.compare(&a, &b), full_chain().compare(&a, &b));
    }

    /// Reversing the only key mirrors every decision.
    #[test]
    fn descending_mirrors_ascending(a in rec_strategy(), b in rec_strategy()) {
        let up = make_compare!(compare_using(field!(Rec, x), Natural::ASC));
        let down = make_compare!(compare_using(field!(Rec, x), Natural::DESC));
        prop_assert_eq!(up.precedes(&a, &b), down.precedes(&b, &a));
    }

    /// Sorting with the chain yields a sequence with no inversions.
    #[test]
    fn sort_has_no_inversions(mut items in prop::collection::vec(rec_strategy(), 0..40)) {
        let chain = full_chain();
        items.sort_by(|l, r| chain.compare(l, r));
        for pair in items.windows(2) {
            prop_assert!(!chain.precedes(&pair[1], &pair[0]));
        }
    }

    /// Named numeric keys stay strict weak orders with NaN and values past
    /// f64 precision, in both directions.
    #[test]
    fn named_number_key_is_strict_weak_order(
        a in reading_strategy(),
        b in reading_strategy(),
        c in reading_strategy(),
        order in prop_oneof![Just("v"), Just("-v")],
    ) {
        let chain = Chain::<Reading>::parse(order).unwrap();

        prop_assert!(!chain.precedes(&a, &a));
        prop_assert!(!(chain.precedes(&a, &b) && chain.precedes(&b, &a)));
        if chain.precedes(&a, &b) && chain.precedes(&b, &c) {
            prop_assert!(chain.precedes(&a, &c));
        }
        if chain.equivalent(&a, &b) && chain.equivalent(&b, &c) {
            prop_assert!(chain.equivalent(&a, &c));
        }
    }
}
