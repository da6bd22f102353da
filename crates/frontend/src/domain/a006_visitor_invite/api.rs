use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a006_visitor_invite::VisitorInvite;

const VISITORS_PATH: &str = "/api/visitor-invites";

pub async fn fetch_visitor_invites() -> Result<Vec<VisitorInvite>, String> {
    fetch_list(VISITORS_PATH, "visitor invites").await
}

pub async fn delete_visitor_invite(id: String) -> Result<(), String> {
    delete_by_id(VISITORS_PATH, &id, "visitor invite").await
}
