use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a009_monthly_reward::MonthlyReward;

const REWARDS_PATH: &str = "/api/monthly-rewards";

pub async fn fetch_monthly_rewards() -> Result<Vec<MonthlyReward>, String> {
    fetch_list(REWARDS_PATH, "monthly rewards").await
}

pub async fn delete_monthly_reward(id: String) -> Result<(), String> {
    delete_by_id(REWARDS_PATH, &id, "monthly reward").await
}
