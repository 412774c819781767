use std::{fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Travel direction along the road's y axis.
///
/// Forward travels towards positive y (down the screen), backward towards
/// negative y.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Default,
    Debug,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

use Direction::*;

impl Direction {
    /// Unit step along the y axis.
    pub fn sign(self) -> f64 {
        match self {
            Forward => 1.0,
            Backward => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forward => write!(f, "forward"),
            Backward => write!(f, "backward"),
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" | "1" => Ok(Forward),
            "backward" | "-1" => Ok(Backward),
            _ => Err("bad direction, expected 'forward' or 'backward'"),
        }
    }
}
