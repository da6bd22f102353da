use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a008_creative::Creative;

const CREATIVES_PATH: &str = "/api/creatives";

pub async fn fetch_creatives() -> Result<Vec<Creative>, String> {
    fetch_list(CREATIVES_PATH, "creatives").await
}

pub async fn delete_creative(id: String) -> Result<(), String> {
    delete_by_id(CREATIVES_PATH, &id, "creative").await
}
