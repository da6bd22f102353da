//! Конверт ответа REST API для списков
//!
//! Backend отдает либо голый массив, либо объект `{ success, message, data: [...] }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Wrapped {
        #[serde(default)]
        success: Option<bool>,
        #[serde(default)]
        message: Option<String>,
        data: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Wrapped { data, .. } => data,
            ListResponse::Bare(items) => items,
        }
    }

    /// Сообщение backend, если он явно сообщил о неуспехе
    pub fn failure_message(&self) -> Option<String> {
        match self {
            ListResponse::Wrapped {
                success: Some(false),
                message,
                ..
            } => Some(message.clone().unwrap_or_else(|| "Request failed".to_string())),
            _ => None,
        }
    }
}

/// Ответ списка до разбора отдельных записей
pub type RawListResponse = ListResponse<Value>;

impl RawListResponse {
    /// Разбирает записи по одной. Запись, которую не удалось разобрать,
    /// пропускается с предупреждением; остальной список сохраняется.
    pub fn decode_items<T: DeserializeOwned>(self, what: &str) -> Vec<T> {
        self.into_items()
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("{}: skipping record #{}: {}", what, index, e);
                    None
                }
            })
            .collect()
    }
}

/// Ответ на мутацию (удаление, сохранение)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_business::dto::BusinessRecord;

    #[test]
    fn test_bare_array() {
        let resp: ListResponse<Value> = serde_json::from_str(r#"[{"_id":"1"},{"_id":"2"}]"#).unwrap();
        assert!(resp.failure_message().is_none());
        assert_eq!(resp.into_items().len(), 2);
    }

    #[test]
    fn test_data_envelope() {
        let resp: ListResponse<Value> =
            serde_json::from_str(r#"{"success":true,"data":[{"_id":"1"}]}"#).unwrap();
        assert_eq!(resp.into_items().len(), 1);

        let resp: ListResponse<Value> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(resp.into_items().is_empty());
    }

    #[test]
    fn test_failure_message() {
        let resp: ListResponse<Value> =
            serde_json::from_str(r#"{"success":false,"message":"Chapter not found","data":[]}"#).unwrap();
        assert_eq!(resp.failure_message().as_deref(), Some("Chapter not found"));
    }

    #[test]
    fn test_decode_items_skips_only_broken_records() {
        let resp: RawListResponse = serde_json::from_str(
            r#"{"data":[{"_id":"b1","amount":"1200"},"oops",{"_id":"b2","amount":[1]}]}"#,
        )
        .unwrap();
        let records: Vec<BusinessRecord> = resp.decode_items("business");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, 1200.0);
        assert_eq!(records[1].amount, 0.0);
    }
}
