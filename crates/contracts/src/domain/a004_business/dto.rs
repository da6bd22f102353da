use crate::shared::lenient::{f64_or_zero, id_string, opt_string};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// Направление записи о бизнесе: переданный другому участнику или полученный от него
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessDirection {
    Given,
    Received,
}

impl BusinessDirection {
    /// Сегмент пути REST API
    pub fn endpoint(&self) -> &'static str {
        match self {
            BusinessDirection::Given => "business-given",
            BusinessDirection::Received => "business-received",
        }
    }

    /// Ключ настроек списочной формы
    pub fn screen_key(&self) -> &'static str {
        match self {
            BusinessDirection::Given => "business_given",
            BusinessDirection::Received => "business_received",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BusinessDirection::Given => "Business Given",
            BusinessDirection::Received => "Business Received",
        }
    }

    /// Подпись столбца со второй стороной сделки
    pub fn counterpart_label(&self) -> &'static str {
        match self {
            BusinessDirection::Given => "Given To",
            BusinessDirection::Received => "Received From",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub member_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub counterpart_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub amount: f64,
    /// "new" или "repeat"
    #[serde(default, deserialize_with = "opt_string")]
    pub business_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub description: Option<String>,
}

impl ListRecord for BusinessRecord {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "memberName" => self.member_name.clone(),
            "counterpartName" => self.counterpart_name.clone(),
            "chapterName" => self.chapter_name.clone(),
            "amount" => Some(self.amount.to_string()),
            "businessType" => self.business_type.clone(),
            "date" => self.date.clone(),
            "description" => self.description.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_as_field_value() {
        let rec: BusinessRecord = serde_json::from_str(
            r#"{ "_id": "b1", "memberName": "Ravi", "amount": 2500, "businessType": "new" }"#,
        )
        .unwrap();
        assert_eq!(rec.field_value("amount").as_deref(), Some("2500"));
        assert_eq!(rec.field_value("businessType").as_deref(), Some("new"));
    }

    #[test]
    fn test_amount_null_or_string() {
        let rec: BusinessRecord =
            serde_json::from_str(r#"{ "_id": "b2", "memberName": "Ravi", "amount": null }"#).unwrap();
        assert_eq!(rec.amount, 0.0);

        let rec: BusinessRecord =
            serde_json::from_str(r#"{ "_id": "b3", "memberName": "Ravi", "amount": "2500" }"#).unwrap();
        assert_eq!(rec.amount, 2500.0);
        assert_eq!(rec.field_value("amount").as_deref(), Some("2500"));
    }

    #[test]
    fn test_direction_keys() {
        assert_eq!(BusinessDirection::Given.endpoint(), "business-given");
        assert_eq!(BusinessDirection::Received.screen_key(), "business_received");
    }
}
