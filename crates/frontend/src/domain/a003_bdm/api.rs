use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a003_bdm::Bdm;

const BDM_PATH: &str = "/api/bdm";

pub async fn fetch_bdms() -> Result<Vec<Bdm>, String> {
    fetch_list(BDM_PATH, "BDM records").await
}

pub async fn delete_bdm(id: String) -> Result<(), String> {
    delete_by_id(BDM_PATH, &id, "BDM record").await
}
