use crate::shared::lenient::{id_string, opt_string};
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// Участник бизнес-сообщества
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub business_category: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub chapter_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub joined_on: Option<String>,
}

impl ListRecord for Member {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "_id" | "id" => Some(self.id.clone()),
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "mobile" => self.mobile.clone(),
            "businessName" => self.business_name.clone(),
            "businessCategory" => self.business_category.clone(),
            "chapterName" => self.chapter_name.clone(),
            "status" => self.status.clone(),
            "joinedOn" => self.joined_on.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_response::ListResponse;

    #[test]
    fn test_deserialize_backend_member() {
        let json = r#"{
            "_id": "65a1f0c2",
            "name": "Priya Shah",
            "email": "priya@example.com",
            "mobile": "9876543210",
            "businessName": "Shah Interiors",
            "chapterName": "Chapter A",
            "status": "active",
            "createdAt": "2024-03-15T14:02:26.123Z"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.record_id(), "65a1f0c2");
        assert_eq!(member.field_value("businessName").as_deref(), Some("Shah Interiors"));
        assert_eq!(member.field_value("joinedOn"), None);
        assert_eq!(member.field_value("unknown"), None);
    }

    #[test]
    fn test_plain_id_alias() {
        let member: Member = serde_json::from_str(r#"{ "id": "7", "name": "Ravi" }"#).unwrap();
        assert_eq!(member.id, "7");
        assert!(member.status.is_none());
    }

    #[test]
    fn test_nameless_member_still_parses() {
        let member: Member =
            serde_json::from_str(r#"{ "_id": "2", "email": "x@example.com", "mobile": 9876543210 }"#).unwrap();
        assert_eq!(member.name, None);
        assert_eq!(member.field_value("name"), None);
        assert_eq!(member.field_value("mobile").as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_numeric_id() {
        let member: Member = serde_json::from_str(r#"{ "id": 42, "name": "Ravi" }"#).unwrap();
        assert_eq!(member.record_id(), "42");
    }

    #[test]
    fn test_partial_record_keeps_the_list() {
        let resp: ListResponse<Member> = serde_json::from_str(
            r#"[{"_id":"1","name":"Priya"},{"_id":"2","email":"x@example.com"}]"#,
        )
        .unwrap();
        let members = resp.into_items();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name.as_deref(), Some("Priya"));
        assert_eq!(members[1].name, None);
    }

    #[test]
    fn test_null_name_in_envelope() {
        let resp: ListResponse<Member> = serde_json::from_str(
            r#"{"success":true,"data":[{"_id":"1","name":null,"status":"active"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.into_items()[0].field_value("status").as_deref(), Some("active"));
    }
}
