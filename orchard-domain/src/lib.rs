//! Domain logic: pickers filling baskets under spoilage and infestation rules, and rankings
//! that keep pickers in a fixed multi-key order.
//!
//! This crate owns *how fruit state propagates* and *how pickers are ordered*. It does not own
//! presentation; that's the `orchard-render` crate.

mod error;
mod order;
mod picker;
mod ranking;

pub use error::{RankingError, RankingResult};
pub use order::RankKey;
pub use picker::{DEFAULT_PICKER_NAME, Picker};
pub use ranking::Ranking;
