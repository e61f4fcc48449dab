use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Taste of a fruit. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taste {
    Sweet,
    Sour,
}

impl Taste {
    pub const ALL: [Taste; 2] = [Taste::Sweet, Taste::Sour];

    pub const fn as_str(self) -> &'static str {
        match self {
            Taste::Sweet => "sweet",
            Taste::Sour => "sour",
        }
    }

    pub const fn is_sweet(self) -> bool {
        matches!(self, Taste::Sweet)
    }
}

/// Size of a fruit. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Large,
    Medium,
    Small,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Large, Size::Medium, Size::Small];

    pub const fn as_str(self) -> &'static str {
        match self {
            Size::Large => "large",
            Size::Medium => "medium",
            Size::Small => "small",
        }
    }
}

/// Quality of a fruit.
///
/// The only transitions are `Healthy -> Rotten` and `Healthy -> Wormy`; both degraded states are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Healthy,
    Rotten,
    Wormy,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Healthy, Quality::Rotten, Quality::Wormy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Quality::Healthy => "healthy",
            Quality::Rotten => "rotten",
            Quality::Wormy => "wormy",
        }
    }

    pub const fn is_healthy(self) -> bool {
        matches!(self, Quality::Healthy)
    }
    pub const fn is_rotten(self) -> bool {
        matches!(self, Quality::Rotten)
    }
    pub const fn is_wormy(self) -> bool {
        matches!(self, Quality::Wormy)
    }
}

impl fmt::Display for Taste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to parse an attribute (or a whole fruit) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAttributeError {
    #[error("unknown {attribute} '{value}' (expected one of: {expected})")]
    UnknownValue {
        attribute: &'static str,
        value: String,
        expected: String,
    },

    #[error("malformed fruit '{0}' (expected taste/size/quality, e.g. sweet/large/healthy)")]
    MalformedFruit(String),
}

fn lookup<T: Copy>(
    attribute: &'static str,
    all: &[T],
    label: fn(T) -> &'static str,
    raw: &str,
) -> Result<T, ParseAttributeError> {
    let needle = raw.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(needle))
        .ok_or_else(|| ParseAttributeError::UnknownValue {
            attribute,
            value: needle.to_string(),
            expected: all.iter().map(|v| label(*v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for Taste {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("taste", &Taste::ALL, Taste::as_str, s)
    }
}

impl FromStr for Size {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("size", &Size::ALL, Size::as_str, s)
    }
}

impl FromStr for Quality {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("quality", &Quality::ALL, Quality::as_str, s)
    }
}
