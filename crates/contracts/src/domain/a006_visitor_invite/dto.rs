use crate::shared::lenient::{id_string, opt_string};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// Приглашение гостя на встречу отделения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorInvite {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub visitor_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub invited_by: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub visit_date: Option<String>,
}

impl ListRecord for VisitorInvite {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "visitorName" => self.visitor_name.clone(),
            "invitedBy" => self.invited_by.clone(),
            "businessName" => self.business_name.clone(),
            "chapterName" => self.chapter_name.clone(),
            "mobile" => self.mobile.clone(),
            "status" => self.status.clone(),
            "visitDate" => self.visit_date.clone(),
            _ => None,
        }
    }
}
