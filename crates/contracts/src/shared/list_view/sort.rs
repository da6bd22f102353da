use super::record::ListRecord;
use std::cmp::Ordering;

/// Текущая сортировка списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Тот же столбец меняет направление, новый столбец сортируется по возрастанию
    pub fn toggled(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(s) if s.field == field => SortState {
                field: field.to_string(),
                ascending: !s.ascending,
            },
            _ => SortState::ascending(field),
        }
    }
}

/// Ключ сортировки: отсутствующее значение, конечное число или текст
enum SortKey {
    Missing,
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: Option<&str>) -> Self {
        match value {
            None => SortKey::Missing,
            Some(v) => match v.trim().parse::<f64>() {
                Ok(x) if x.is_finite() => SortKey::Number(x),
                _ => SortKey::Text(v.to_lowercase()),
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

/// Сравнение значений полей: отсутствующие, затем числа по величине, затем
/// остальное как текст без учета регистра. Порядок полный и для смешанных столбцов.
pub fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (SortKey::of(a), SortKey::of(b)) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(&y),
        (x, y) => x.rank().cmp(&y.rank()),
    }
}

/// Стабильная сортировка ссылок на записи по полю
pub fn sort_records<R: ListRecord>(items: &mut [&R], sort: &SortState) {
    items.sort_by(|a, b| {
        let cmp = compare_values(
            a.field_value(&sort.field).as_deref(),
            b.field_value(&sort.field).as_deref(),
        );
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Индикатор сортировки для заголовка столбца
pub fn sort_indicator(current: Option<&SortState>, field: &str) -> &'static str {
    match current {
        Some(s) if s.field == field => {
            if s.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(compare_values(Some("9"), Some("10")), Ordering::Less);
        assert_eq!(compare_values(Some("2500.50"), Some("300")), Ordering::Greater);
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        assert_eq!(compare_values(Some("alpha"), Some("Beta")), Ordering::Less);
        assert_eq!(compare_values(Some("ALPHA"), Some("alpha")), Ordering::Equal);
        assert_eq!(compare_values(None, Some("a")), Ordering::Less);
    }

    #[test]
    fn test_mixed_numbers_and_text_are_totally_ordered() {
        assert_eq!(compare_values(Some("10"), Some("1a")), Ordering::Less);
        assert_eq!(compare_values(Some("1a"), Some("9")), Ordering::Greater);
        assert_eq!(compare_values(Some("NaN"), Some("5")), Ordering::Greater);
        assert_eq!(compare_values(Some("inf"), Some("abc")), Ordering::Greater);

        let mut values = vec!["10", "1a", "NaN", "9", "Apple"];
        values.sort_by(|a, b| compare_values(Some(*a), Some(*b)));
        assert_eq!(values, vec!["9", "10", "1a", "Apple", "NaN"]);
    }

    #[test]
    fn test_toggle() {
        let first = SortState::toggled(None, "name");
        assert!(first.ascending);
        let second = SortState::toggled(Some(&first), "name");
        assert!(!second.ascending);
        let other = SortState::toggled(Some(&second), "city");
        assert_eq!(other, SortState::ascending("city"));
    }

    #[test]
    fn test_sort_is_stable() {
        let records: Vec<Value> = vec![
            json!({ "_id": "1", "chapter": "B" }),
            json!({ "_id": "2", "chapter": "A" }),
            json!({ "_id": "3", "chapter": "B" }),
            json!({ "_id": "4", "chapter": "a" }),
        ];
        let mut refs: Vec<&Value> = records.iter().collect();
        sort_records(&mut refs, &SortState::ascending("chapter"));
        let ids: Vec<String> = refs.iter().map(|r| r.record_id()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);

        sort_records(
            &mut refs,
            &SortState {
                field: "chapter".into(),
                ascending: false,
            },
        );
        let ids: Vec<String> = refs.iter().map(|r| r.record_id()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sort_indicator() {
        let s = SortState::ascending("name");
        assert_eq!(sort_indicator(Some(&s), "name"), " ▲");
        assert_eq!(sort_indicator(Some(&s), "city"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }
}
