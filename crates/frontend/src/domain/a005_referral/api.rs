use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a005_referral::Referral;

const REFERRALS_PATH: &str = "/api/referrals";

pub async fn fetch_referrals() -> Result<Vec<Referral>, String> {
    fetch_list(REFERRALS_PATH, "referrals").await
}

pub async fn delete_referral(id: String) -> Result<(), String> {
    delete_by_id(REFERRALS_PATH, &id, "referral").await
}
