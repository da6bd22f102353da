use crate::shared::lenient::{id_string, opt_string};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// Рекомендация (referral), переданная одним участником другому
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub referral_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub referred_by: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub referred_to: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date: Option<String>,
}

impl ListRecord for Referral {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "referralName" => self.referral_name.clone(),
            "referredBy" => self.referred_by.clone(),
            "referredTo" => self.referred_to.clone(),
            "chapterName" => self.chapter_name.clone(),
            "mobile" => self.mobile.clone(),
            "status" => self.status.clone(),
            "date" => self.date.clone(),
            _ => None,
        }
    }
}
