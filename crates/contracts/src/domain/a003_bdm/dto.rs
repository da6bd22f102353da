use crate::shared::lenient::{id_string, opt_string};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// BDM (business development meeting) - встреча один на один между участниками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bdm {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub member_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub met_with: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date: Option<String>,
    /// "online" или "offline"
    #[serde(default, deserialize_with = "opt_string")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub notes: Option<String>,
}

impl ListRecord for Bdm {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "memberName" => self.member_name.clone(),
            "metWith" => self.met_with.clone(),
            "chapterName" => self.chapter_name.clone(),
            "date" => self.date.clone(),
            "mode" => self.mode.clone(),
            "notes" => self.notes.clone(),
            _ => None,
        }
    }
}
