use crate::order::RankKey;
use orchard_types::{Fruit, Quality, Size, Taste};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::AddAssign;
use tracing::{debug, trace};

/// Name given to pickers created without one.
pub const DEFAULT_PICKER_NAME: &str = "Anonymous";

/// A fruit picker: a named, ordered basket of fruit.
///
/// Every fruit enters through [`Picker::add_fruit`], which applies two rules:
/// - adjacent-pair spoilage between the new fruit and its predecessor;
/// - infestation of the window of fruit picked since the previous wormy fruit.
///
/// Counts are derived by scanning the basket; only the position of the last wormy fruit is
/// cached, and it is kept aligned when fruit leaves from the front.
#[derive(Debug, Clone)]
pub struct Picker {
    name: String,
    fruits: VecDeque<Fruit>,
    last_wormy: Option<usize>,
}

impl Default for Picker {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Picker {
    /// Creates an empty picker. An empty name is replaced with [`DEFAULT_PICKER_NAME`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                DEFAULT_PICKER_NAME.to_string()
            } else {
                name
            },
            fruits: VecDeque::new(),
            last_wormy: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(DEFAULT_PICKER_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fruit in picking order, oldest first.
    pub fn fruits(&self) -> impl ExactSizeIterator<Item = &Fruit> + '_ {
        self.fruits.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    pub fn count_fruits(&self) -> usize {
        self.fruits.len()
    }

    pub fn count_taste(&self, taste: Taste) -> usize {
        self.fruits.iter().filter(|f| f.taste() == taste).count()
    }

    pub fn count_size(&self, size: Size) -> usize {
        self.fruits.iter().filter(|f| f.size() == size).count()
    }

    pub fn count_quality(&self, quality: Quality) -> usize {
        self.fruits.iter().filter(|f| f.quality() == quality).count()
    }

    /// Appends a fruit and applies the spoilage and infestation rules, in that order.
    pub fn add_fruit(&mut self, fruit: Fruit) {
        self.fruits.push_back(fruit);
        self.spoil_last_pair();
        self.infest_since_last_wormy();
    }

    /// Moves this picker's oldest fruit to the end of `target`'s basket.
    ///
    /// The fruit goes through `target`'s full append pipeline. No-op when this picker is empty.
    pub fn give_to(&mut self, target: &mut Picker) {
        let Some(fruit) = self.pop_front() else {
            trace!(picker = %self.name, "nothing to give");
            return;
        };
        debug!(from = %self.name, to = %target.name, ?fruit, "transfer fruit");
        target.add_fruit(fruit);
    }

    /// Moves `source`'s oldest fruit to the end of this picker's basket.
    ///
    /// Same semantics as `source.give_to(self)`.
    pub fn take_from(&mut self, source: &mut Picker) {
        source.give_to(self);
    }

    /// The derived counts this picker is ranked by.
    pub fn rank_key(&self) -> RankKey {
        RankKey::of(self)
    }

    /// Ranking order: `Less` means `self` ranks ahead of `other`.
    ///
    /// Two pickers can compare `Equal` here without being equal (`==`); names and fruit order
    /// do not take part.
    pub fn rank_cmp(&self, other: &Picker) -> Ordering {
        other.rank_key().cmp(&self.rank_key())
    }

    fn pop_front(&mut self) -> Option<Fruit> {
        let fruit = self.fruits.pop_front()?;
        self.last_wormy = match self.last_wormy {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        Some(fruit)
    }

    fn spoil_last_pair(&mut self) {
        let len = self.fruits.len();
        if len < 2 {
            return;
        }
        let (prev, last) = (len - 2, len - 1);
        match (self.fruits[prev].quality(), self.fruits[last].quality()) {
            (Quality::Healthy, Quality::Rotten) => {
                self.fruits[prev].go_rotten();
                trace!(picker = %self.name, index = prev, "previous fruit spoiled by new one");
            }
            (Quality::Rotten, Quality::Healthy) => {
                self.fruits[last].go_rotten();
                trace!(picker = %self.name, index = last, "new fruit spoiled by previous one");
            }
            _ => {}
        }
    }

    fn infest_since_last_wormy(&mut self) {
        let Some(newest) = self.fruits.len().checked_sub(1) else {
            return;
        };
        if !self.fruits[newest].quality().is_wormy() {
            return;
        }

        let start = self.last_wormy.map_or(0, |i| i + 1);
        let mut infested = 0usize;
        for fruit in self.fruits.range_mut(start..newest) {
            if fruit.is_healthy() && fruit.is_sweet() {
                fruit.become_worm_infested();
                infested += 1;
            }
        }
        self.last_wormy = Some(newest);

        if infested > 0 {
            debug!(picker = %self.name, start, end = newest, infested, "worms spread");
        }
    }
}

/// Structural equality: same name and the same fruit in the same order.
impl PartialEq for Picker {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.fruits == other.fruits
    }
}

impl Eq for Picker {}

impl AddAssign<Fruit> for Picker {
    fn add_assign(&mut self, fruit: Fruit) {
        self.add_fruit(fruit);
    }
}
