//! Уровень награды участника по сумме баллов за месяц

use serde::{Deserialize, Serialize};
use std::fmt;

/// Первый балл уровня Silver
pub const SILVER_MIN_POINTS: i64 = 30;
/// Первый балл уровня Gold
pub const GOLD_MIN_POINTS: i64 = 51;
/// Первый балл уровня Diamond
pub const DIAMOND_MIN_POINTS: i64 = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RewardTier {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl RewardTier {
    pub const ALL: [RewardTier; 4] = [
        RewardTier::Diamond,
        RewardTier::Gold,
        RewardTier::Silver,
        RewardTier::Bronze,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RewardTier::Diamond => "Diamond",
            RewardTier::Gold => "Gold",
            RewardTier::Silver => "Silver",
            RewardTier::Bronze => "Bronze",
        }
    }

    /// Диапазон баллов для подсказки в UI
    pub fn range_label(&self) -> &'static str {
        match self {
            RewardTier::Diamond => "76+",
            RewardTier::Gold => "51-75",
            RewardTier::Silver => "30-50",
            RewardTier::Bronze => "0-29",
        }
    }
}

impl fmt::Display for RewardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Уровень по сумме баллов. Отрицательные значения дают Bronze.
pub fn tier_for(points: i64) -> RewardTier {
    if points >= DIAMOND_MIN_POINTS {
        RewardTier::Diamond
    } else if points >= GOLD_MIN_POINTS {
        RewardTier::Gold
    } else if points >= SILVER_MIN_POINTS {
        RewardTier::Silver
    } else {
        RewardTier::Bronze
    }
}
