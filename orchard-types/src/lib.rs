//! Shared value types for the orchard workspace.
//!
//! # Design constraints
//! - `Taste`, `Size` and `Quality` are independent; nothing converts one into another.
//! - Converting a [`Fruit`] to or from its attribute tuple is always an explicit `From` call.
//! - Quality degrades one way only.

mod attrs;
mod fruit;

pub use attrs::{ParseAttributeError, Quality, Size, Taste};
pub use fruit::{Fruit, ROTTY_ONE, YUMMY_ONE};
