use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverClass {
    Fast,
    Normal,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginBand {
    High,
    Medium,
    Low,
}

/// Variants are declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    RestockUrgently,
    Promote,
    AdjustPrice,
    None,
}

impl AbcClass {
    pub const ALL: [AbcClass; 3] = [AbcClass::A, AbcClass::B, AbcClass::C];

    pub fn as_str(self) -> &'static str {
        match self {
            AbcClass::A => "a",
            AbcClass::B => "b",
            AbcClass::C => "c",
        }
    }
}

impl TurnoverClass {
    pub const ALL: [TurnoverClass; 3] = [
        TurnoverClass::Fast,
        TurnoverClass::Normal,
        TurnoverClass::Slow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TurnoverClass::Fast => "fast",
            TurnoverClass::Normal => "normal",
            TurnoverClass::Slow => "slow",
        }
    }
}

impl MarginBand {
    pub const ALL: [MarginBand; 3] = [MarginBand::High, MarginBand::Medium, MarginBand::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            MarginBand::High => "high",
            MarginBand::Medium => "medium",
            MarginBand::Low => "low",
        }
    }
}

impl RecommendedAction {
    pub const ALL: [RecommendedAction; 4] = [
        RecommendedAction::RestockUrgently,
        RecommendedAction::Promote,
        RecommendedAction::AdjustPrice,
        RecommendedAction::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecommendedAction::RestockUrgently => "restock_urgently",
            RecommendedAction::Promote => "promote",
            RecommendedAction::AdjustPrice => "adjust_price",
            RecommendedAction::None => "none",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(AbcClass, TurnoverClass, MarginBand, RecommendedAction);
