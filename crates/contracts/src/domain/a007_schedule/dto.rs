use crate::shared::lenient::{id_string, opt_string};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// Запланированная встреча или мероприятие отделения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    /// "meeting" или "event"
    #[serde(default, deserialize_with = "opt_string")]
    pub schedule_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
}

impl ListRecord for Schedule {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "title" => self.title.clone(),
            "chapterName" => self.chapter_name.clone(),
            "scheduleType" => self.schedule_type.clone(),
            "date" => self.date.clone(),
            "time" => self.time.clone(),
            "venue" => self.venue.clone(),
            "status" => self.status.clone(),
            _ => None,
        }
    }
}
