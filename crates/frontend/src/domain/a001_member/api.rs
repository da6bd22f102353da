use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a001_member::Member;

const MEMBERS_PATH: &str = "/api/members";

pub async fn fetch_members() -> Result<Vec<Member>, String> {
    fetch_list(MEMBERS_PATH, "members").await
}

pub async fn delete_member(id: String) -> Result<(), String> {
    delete_by_id(MEMBERS_PATH, &id, "member").await
}
