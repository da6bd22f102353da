use crate::shared::lenient::{i64_or_zero, id_string, opt_string, u32_or_zero};
use crate::shared::list_view::ListRecord;
use crate::shared::reward_tier::{tier_for, RewardTier};
use serde::{Deserialize, Serialize};

/// Месячная сводка баллов участника.
///
/// Баллы по категориям и итог приходят с сервера как есть; здесь из итога
/// только выводится уровень награды.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReward {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub member_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    /// Месяц в формате YYYY-MM
    #[serde(default, deserialize_with = "opt_string")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub meetings: u32,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub bdm: u32,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub business: u32,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub referrals: u32,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub visitors: u32,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub socials: u32,
    #[serde(default, deserialize_with = "i64_or_zero")]
    pub total_points: i64,
}

impl MonthlyReward {
    pub fn tier(&self) -> RewardTier {
        tier_for(self.total_points)
    }
}

impl ListRecord for MonthlyReward {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "memberName" => self.member_name.clone(),
            "chapterName" => self.chapter_name.clone(),
            "month" => self.month.clone(),
            "meetings" => Some(self.meetings.to_string()),
            "bdm" => Some(self.bdm.to_string()),
            "business" => Some(self.business.to_string()),
            "referrals" => Some(self.referrals.to_string()),
            "visitors" => Some(self.visitors.to_string()),
            "socials" => Some(self.socials.to_string()),
            "totalPoints" => Some(self.total_points.to_string()),
            "tier" => Some(self.tier().label().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_is_derived_from_total() {
        let reward: MonthlyReward = serde_json::from_str(
            r#"{ "_id": "r1", "memberName": "Anita", "month": "2024-03", "totalPoints": 51 }"#,
        )
        .unwrap();
        assert_eq!(reward.tier(), RewardTier::Gold);
        assert_eq!(reward.field_value("tier").as_deref(), Some("Gold"));
        assert_eq!(reward.meetings, 0);
    }

    #[test]
    fn test_missing_points_are_bronze() {
        let reward: MonthlyReward =
            serde_json::from_str(r#"{ "_id": "r2", "memberName": "Kiran" }"#).unwrap();
        assert_eq!(reward.tier(), RewardTier::Bronze);
    }

    #[test]
    fn test_points_as_strings_and_nulls() {
        let reward: MonthlyReward = serde_json::from_str(
            r#"{ "_id": "r3", "memberName": null, "meetings": "4", "bdm": null, "totalPoints": "80" }"#,
        )
        .unwrap();
        assert_eq!(reward.member_name, None);
        assert_eq!(reward.meetings, 4);
        assert_eq!(reward.bdm, 0);
        assert_eq!(reward.tier(), RewardTier::Diamond);
    }
}
