use crate::picker::Picker;
use orchard_types::{Quality, Size, Taste};

/// Counts a picker is ranked by, most significant first.
///
/// For every field more is better, so the derived `Ord` sorts the worst picker first; ranking
/// order is the reverse of it (see [`Picker::rank_cmp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RankKey {
    pub healthy: usize,
    pub sweet: usize,
    pub large: usize,
    pub medium: usize,
    pub small: usize,
    pub total: usize,
}

impl RankKey {
    pub fn of(picker: &Picker) -> Self {
        Self {
            healthy: picker.count_quality(Quality::Healthy),
            sweet: picker.count_taste(Taste::Sweet),
            large: picker.count_size(Size::Large),
            medium: picker.count_size(Size::Medium),
            small: picker.count_size(Size::Small),
            total: picker.count_fruits(),
        }
    }
}
