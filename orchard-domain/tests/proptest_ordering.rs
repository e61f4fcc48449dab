//! Property-based tests for picker invariants and ranking order.
//!
//! These tests verify that:
//! - Attribute counts always partition the basket
//! - Degraded fruit never changes quality again while it stays in a basket
//! - Rankings are sorted and stable regardless of how they were built
//! - Merging is the stable merge of both inputs
//! - Indexing clamps past the end

use orchard_domain::{Picker, Ranking, RankingError};
use orchard_types::{Fruit, Quality, Size, Taste};
use proptest::prelude::*;
use std::cmp::Ordering;

fn arb_fruit() -> impl Strategy<Value = Fruit> {
    (
        prop::sample::select(Taste::ALL.to_vec()),
        prop::sample::select(Size::ALL.to_vec()),
        prop::sample::select(Quality::ALL.to_vec()),
    )
        .prop_map(Fruit::from)
}

/// A picker filled through the append pipeline. The empty name exercises the default.
fn arb_picker() -> impl Strategy<Value = Picker> {
    (
        prop::sample::select(vec!["a", "b", "c", ""]),
        prop::collection::vec(arb_fruit(), 0..8),
    )
        .prop_map(|(name, fruits)| {
            let mut p = Picker::new(name);
            for f in fruits {
                p.add_fruit(f);
            }
            p
        })
}

fn arb_pickers(max: usize) -> impl Strategy<Value = Vec<Picker>> {
    prop::collection::vec(arb_picker(), 0..max)
}

#[derive(Debug, Clone)]
enum Step {
    Add(Fruit),
    GiveToOther,
    TakeFromOther,
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            4 => arb_fruit().prop_map(Step::Add),
            1 => Just(Step::GiveToOther),
            1 => Just(Step::TakeFromOther),
        ],
        0..60,
    )
}

fn is_rank_sorted(r: &Ranking) -> bool {
    let pickers: Vec<&Picker> = r.iter().collect();
    pickers
        .windows(2)
        .all(|w| w[0].rank_cmp(w[1]) != Ordering::Greater)
}

/// Stable sort of the concatenation; equal to a stable merge when both inputs are sorted.
fn reference_merge(left: &Ranking, right: &Ranking) -> Vec<Picker> {
    let mut all: Vec<Picker> = left.iter().chain(right.iter()).cloned().collect();
    all.sort_by(Picker::rank_cmp);
    all
}

proptest! {
    /// Taste, size and quality counts each sum to the basket size.
    #[test]
    fn counts_partition_basket(steps in arb_steps()) {
        let mut p = Picker::new("main");
        let mut other = Picker::new("other");
        other.add_fruit(Fruit::new(Taste::Sweet, Size::Large, Quality::Healthy));

        for step in steps {
            match step {
                Step::Add(f) => p.add_fruit(f),
                Step::GiveToOther => p.give_to(&mut other),
                Step::TakeFromOther => p.take_from(&mut other),
            }
            for picker in [&p, &other] {
                let total = picker.count_fruits();
                let tastes: usize = Taste::ALL.iter().map(|t| picker.count_taste(*t)).sum();
                let sizes: usize = Size::ALL.iter().map(|s| picker.count_size(*s)).sum();
                let qualities: usize = Quality::ALL.iter().map(|q| picker.count_quality(*q)).sum();
                prop_assert_eq!(tastes, total);
                prop_assert_eq!(sizes, total);
                prop_assert_eq!(qualities, total);
            }
        }
    }

    /// Appending never revives fruit or swaps one degraded state for the other.
    #[test]
    fn appends_never_undo_degradation(fruits in prop::collection::vec(arb_fruit(), 1..40)) {
        let mut p = Picker::new("main");
        for f in fruits {
            let before: Vec<Quality> = p.fruits().map(|f| f.quality()).collect();
            p.add_fruit(f);
            let after: Vec<Quality> = p.fruits().map(|f| f.quality()).collect();
            for (b, a) in before.iter().zip(after.iter()) {
                if *b != Quality::Healthy {
                    prop_assert_eq!(a, b);
                }
            }
            // Attributes other than quality never move.
            prop_assert_eq!(p.fruits().last().map(|f| (f.taste(), f.size())), Some((f.taste(), f.size())));
        }
    }

    /// A healthy sweet fruit never survives a later wormy arrival in the same basket.
    #[test]
    fn wormy_arrival_leaves_no_healthy_sweet_fruit_behind(
        fruits in prop::collection::vec(arb_fruit(), 0..30),
        wormy_taste in prop::sample::select(Taste::ALL.to_vec()),
    ) {
        let mut p = Picker::new("main");
        for f in fruits {
            p.add_fruit(f);
        }
        p.add_fruit(Fruit::new(wormy_taste, Size::Small, Quality::Wormy));
        prop_assert!(p.fruits().all(|f| !(f.is_healthy() && f.is_sweet())));
    }

    /// Batch construction sorts, and matches inserting one at a time.
    #[test]
    fn batch_and_incremental_agree(pickers in arb_pickers(12)) {
        let batch = Ranking::from_pickers(pickers.clone());
        prop_assert!(is_rank_sorted(&batch));

        let mut incremental = Ranking::new();
        for p in pickers.iter().cloned() {
            incremental += p;
        }
        prop_assert_eq!(&incremental, &batch);

        let mut reference = pickers;
        reference.sort_by(Picker::rank_cmp);
        let got: Vec<Picker> = batch.iter().cloned().collect();
        prop_assert_eq!(got, reference);
    }

    /// Merging two sorted rankings is their stable merge.
    #[test]
    fn merge_is_stable(left in arb_pickers(10), right in arb_pickers(10)) {
        let left = Ranking::from_pickers(left);
        let right = Ranking::from_pickers(right);

        let merged = &left + &right;
        prop_assert_eq!(merged.count_pickers(), left.count_pickers() + right.count_pickers());
        prop_assert!(is_rank_sorted(&merged));

        let got: Vec<Picker> = merged.iter().cloned().collect();
        prop_assert_eq!(got, reference_merge(&left, &right));

        let mut acc = left.clone();
        acc += &right;
        prop_assert_eq!(acc, merged);
    }

    /// Removing a member takes out exactly one picker and keeps the order.
    #[test]
    fn remove_keeps_order(pickers in arb_pickers(10), pick in any::<prop::sample::Index>()) {
        let mut r = Ranking::from_pickers(pickers);
        if r.is_empty() {
            prop_assert!(!r.remove(&Picker::new("missing")));
            return Ok(());
        }
        let victim = r.get(pick.index(r.count_pickers())).unwrap().clone();
        let before = r.count_pickers();
        prop_assert!(r.remove(&victim));
        prop_assert_eq!(r.count_pickers(), before - 1);
        prop_assert!(is_rank_sorted(&r));
    }

    /// Indexing past the end returns the last picker; an empty ranking fails.
    #[test]
    fn indexing_clamps(pickers in arb_pickers(8), index in 0usize..64) {
        let r = Ranking::from_pickers(pickers);
        match r.count_pickers() {
            0 => prop_assert_eq!(r.get(index), Err(RankingError::Empty { index })),
            k if index >= k => prop_assert_eq!(r.get(index), r.get(k - 1)),
            _ => prop_assert!(std::ptr::eq(r.get(index).unwrap(), r.iter().nth(index).unwrap())),
        }
    }

    /// More healthy fruit always ranks strictly ahead.
    #[test]
    fn healthy_count_dominates(a in arb_picker(), b in arb_picker()) {
        let (ha, hb) = (a.count_quality(Quality::Healthy), b.count_quality(Quality::Healthy));
        if ha > hb {
            prop_assert_eq!(a.rank_cmp(&b), Ordering::Less);
            let r = Ranking::from_pickers([b.clone(), a.clone()]);
            prop_assert_eq!(r.get(0), Ok(&a));
        }
    }
}
