use crate::shared::lenient::{id_string, opt_string, u32_or_zero};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// Отделение (chapter) сообщества
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub meeting_day: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "u32_or_zero")]
    pub member_count: u32,
}

impl ListRecord for Chapter {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "chapterName" => self.chapter_name.clone(),
            "city" => self.city.clone(),
            "region" => self.region.clone(),
            "meetingDay" => self.meeting_day.clone(),
            "status" => self.status.clone(),
            "memberCount" => Some(self.member_count.to_string()),
            _ => None,
        }
    }
}
