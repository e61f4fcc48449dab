//! The reference picking session replayed by `orchard demo`.

use orchard_domain::{Picker, Ranking};
use orchard_types::{Fruit, Quality, ROTTY_ONE, Size, Taste, YUMMY_ONE};
use tracing::info;

/// A titled ranking produced by the session.
#[derive(Debug, Clone)]
pub struct SessionRanking {
    pub title: String,
    pub ranking: Ranking,
}

fn picker(name: &str, fruits: &[Fruit]) -> Picker {
    let mut p = Picker::new(name);
    for fruit in fruits {
        p.add_fruit(*fruit);
    }
    p
}

/// Builds three rankings: one from a batch, one by single inserts and a removal, and the merge
/// of both.
pub fn reference_rankings() -> Vec<SessionRanking> {
    let sour_wormy = Fruit::new(Taste::Sour, Size::Medium, Quality::Wormy);

    let arnold = picker("Arnold", &[YUMMY_ONE, ROTTY_ONE]);
    let sylvester = picker("Sylvester", &[YUMMY_ONE, YUMMY_ONE, ROTTY_ONE]);
    let anonymous = picker("", &[sour_wormy]);
    let chuck = picker("Chuck", &[sour_wormy]);

    let first = Ranking::from_pickers([anonymous.clone(), sylvester, arnold.clone()]);

    let mut second = Ranking::new();
    second += arnold;
    second += chuck.clone();
    second += anonymous.clone();
    second += chuck;
    second.remove(&anonymous);

    let mut third = Ranking::new();
    third += &first;
    third += &second;

    info!(
        first = first.count_pickers(),
        second = second.count_pickers(),
        third = third.count_pickers(),
        "reference session replayed"
    );

    [first, second, third]
        .into_iter()
        .enumerate()
        .map(|(i, ranking)| SessionRanking {
            title: format!("RANKING {}", i + 1),
            ranking,
        })
        .collect()
}
