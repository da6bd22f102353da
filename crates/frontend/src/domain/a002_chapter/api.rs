use crate::shared::api_utils::{delete_by_id, fetch_list};
use contracts::domain::a002_chapter::Chapter;

const CHAPTERS_PATH: &str = "/api/chapters";

pub async fn fetch_chapters() -> Result<Vec<Chapter>, String> {
    fetch_list(CHAPTERS_PATH, "chapters").await
}

pub async fn delete_chapter(id: String) -> Result<(), String> {
    delete_by_id(CHAPTERS_PATH, &id, "chapter").await
}
