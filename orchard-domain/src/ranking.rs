use crate::error::{RankingError, RankingResult};
use crate::picker::Picker;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign};
use tracing::debug;

/// Pickers kept in ranking order ([`Picker::rank_cmp`]), best first.
///
/// Pickers that rank equivalently keep the order in which they arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    pickers: Vec<Picker>,
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ranking from an unordered batch with one stable sort.
    pub fn from_pickers(pickers: impl IntoIterator<Item = Picker>) -> Self {
        let mut pickers: Vec<Picker> = pickers.into_iter().collect();
        pickers.sort_by(Picker::rank_cmp);
        Self { pickers }
    }

    pub fn count_pickers(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Picker> {
        self.pickers.iter()
    }

    /// Returns the picker at `index`, or the last one when `index` is past the end.
    pub fn get(&self, index: usize) -> RankingResult<&Picker> {
        self.pickers
            .get(index)
            .or_else(|| self.pickers.last())
            .ok_or(RankingError::Empty { index })
    }

    /// Adds a picker behind every picker it does not rank strictly ahead of.
    ///
    /// Same result as appending and stable-sorting the whole ranking again.
    pub fn insert(&mut self, picker: Picker) {
        let at = self
            .pickers
            .partition_point(|p| p.rank_cmp(&picker) != Ordering::Greater);
        debug!(picker = %picker.name(), position = at, "insert picker");
        self.pickers.insert(at, picker);
    }

    /// Removes the first picker equal (`==`) to `picker`. Returns whether one was removed.
    pub fn remove(&mut self, picker: &Picker) -> bool {
        match self.pickers.iter().position(|p| p == picker) {
            Some(at) => {
                self.pickers.remove(at);
                debug!(picker = %picker.name(), position = at, "remove picker");
                true
            }
            None => false,
        }
    }

    /// Merges `other` into this ranking. On ties pickers already here go first.
    pub fn merge(&mut self, other: &Ranking) {
        let left = std::mem::take(&mut self.pickers);
        self.pickers = merge_sorted(left, other.pickers.clone());
    }

    /// Merged copy of both rankings; neither input changes.
    pub fn merged(&self, other: &Ranking) -> Ranking {
        Ranking {
            pickers: merge_sorted(self.pickers.clone(), other.pickers.clone()),
        }
    }
}

/// Stable two-way merge of two rank-ordered sequences.
///
/// The right element is taken only when it ranks strictly ahead of the left one.
fn merge_sorted(left: Vec<Picker>, right: Vec<Picker>) -> Vec<Picker> {
    debug!(left = left.len(), right = right.len(), "merge rankings");
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.rank_cmp(l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

impl FromIterator<Picker> for Ranking {
    fn from_iter<I: IntoIterator<Item = Picker>>(iter: I) -> Self {
        Self::from_pickers(iter)
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a Picker;
    type IntoIter = std::slice::Iter<'a, Picker>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AddAssign<Picker> for Ranking {
    fn add_assign(&mut self, picker: Picker) {
        self.insert(picker);
    }
}

impl AddAssign<&Ranking> for Ranking {
    fn add_assign(&mut self, other: &Ranking) {
        self.merge(other);
    }
}

impl AddAssign<Ranking> for Ranking {
    fn add_assign(&mut self, other: Ranking) {
        let left = std::mem::take(&mut self.pickers);
        self.pickers = merge_sorted(left, other.pickers);
    }
}

impl Add<&Ranking> for &Ranking {
    type Output = Ranking;

    fn add(self, other: &Ranking) -> Ranking {
        self.merged(other)
    }
}

impl Add for Ranking {
    type Output = Ranking;

    fn add(mut self, other: Ranking) -> Ranking {
        self += other;
        self
    }
}
