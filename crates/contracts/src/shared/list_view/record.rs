use serde_json::Value;

/// Запись, которую умеет показывать списочная форма.
///
/// Ядру списка нужны только идентификатор и доступ к полям по имени:
/// поиск и фильтры настраиваются именами полей, а не кодом экрана.
pub trait ListRecord {
    /// Стабильный уникальный идентификатор записи
    fn record_id(&self) -> String;

    /// Значение поля в текстовом виде.
    ///
    /// `None` для отсутствующего, пустого (null) или составного поля.
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Преобразует скалярное JSON значение в строку (null и составные значения дают `None`)
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Сырые JSON записи из REST ответа (`_id` как у backend, иначе `id`)
impl ListRecord for Value {
    fn record_id(&self) -> String {
        self.get("_id")
            .or_else(|| self.get("id"))
            .and_then(scalar_to_string)
            .unwrap_or_default()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        self.get(field).and_then(scalar_to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_record_id_prefers_underscore_id() {
        let rec = json!({ "_id": "64f0", "id": "other" });
        assert_eq!(rec.record_id(), "64f0");

        let rec = json!({ "id": 17 });
        assert_eq!(rec.record_id(), "17");

        let rec = json!({ "name": "no id" });
        assert_eq!(rec.record_id(), "");
    }

    #[test]
    fn test_json_field_value_scalars_only() {
        let rec = json!({
            "name": "John Doe",
            "points": 42,
            "active": true,
            "chapter": null,
            "tags": ["a", "b"],
            "address": { "city": "Pune" }
        });
        assert_eq!(rec.field_value("name").as_deref(), Some("John Doe"));
        assert_eq!(rec.field_value("points").as_deref(), Some("42"));
        assert_eq!(rec.field_value("active").as_deref(), Some("true"));
        assert_eq!(rec.field_value("chapter"), None);
        assert_eq!(rec.field_value("tags"), None);
        assert_eq!(rec.field_value("address"), None);
        assert_eq!(rec.field_value("missing"), None);
    }
}
