use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a007_schedule::Schedule;

const SCHEDULES_PATH: &str = "/api/schedules";

pub async fn fetch_schedules() -> Result<Vec<Schedule>, String> {
    fetch_list(SCHEDULES_PATH, "schedules").await
}

pub async fn delete_schedule(id: String) -> Result<(), String> {
    delete_by_id(SCHEDULES_PATH, &id, "schedule").await
}
