use crate::attrs::{ParseAttributeError, Quality, Size, Taste};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single picked fruit.
///
/// Taste and size never change. Quality can only leave `Healthy`, once, through
/// [`Fruit::go_rotten`] or [`Fruit::become_worm_infested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fruit {
    taste: Taste,
    size: Size,
    quality: Quality,
}

impl Fruit {
    pub const fn new(taste: Taste, size: Size, quality: Quality) -> Self {
        Self {
            taste,
            size,
            quality,
        }
    }

    pub const fn taste(&self) -> Taste {
        self.taste
    }

    pub const fn size(&self) -> Size {
        self.size
    }

    pub const fn quality(&self) -> Quality {
        self.quality
    }

    pub const fn is_healthy(&self) -> bool {
        self.quality.is_healthy()
    }

    pub const fn is_sweet(&self) -> bool {
        self.taste.is_sweet()
    }

    /// Healthy becomes rotten. No-op for rotten or wormy fruit.
    pub fn go_rotten(&mut self) {
        if self.quality.is_healthy() {
            self.quality = Quality::Rotten;
        }
    }

    /// Healthy becomes wormy. No-op for rotten or wormy fruit.
    pub fn become_worm_infested(&mut self) {
        if self.quality.is_healthy() {
            self.quality = Quality::Wormy;
        }
    }
}

impl From<(Taste, Size, Quality)> for Fruit {
    fn from((taste, size, quality): (Taste, Size, Quality)) -> Self {
        Self::new(taste, size, quality)
    }
}

impl From<Fruit> for (Taste, Size, Quality) {
    fn from(fruit: Fruit) -> Self {
        (fruit.taste, fruit.size, fruit.quality)
    }
}

/// Parses the compact `taste/size/quality` form, e.g. `sweet/large/healthy`.
impl FromStr for Fruit {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(taste), Some(size), Some(quality), None) => Ok(Fruit::new(
                taste.parse()?,
                size.parse()?,
                quality.parse()?,
            )),
            _ => Err(ParseAttributeError::MalformedFruit(s.to_string())),
        }
    }
}

/// Sweet, large and healthy.
pub const YUMMY_ONE: Fruit = Fruit::new(Taste::Sweet, Size::Large, Quality::Healthy);

/// Sour, small and rotten.
pub const ROTTY_ONE: Fruit = Fruit::new(Taste::Sour, Size::Small, Quality::Rotten);
