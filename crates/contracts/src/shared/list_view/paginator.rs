//! Разбиение отфильтрованного списка на страницы

/// Результат проекции списка: текущая страница и сведения для пагинатора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResult<R> {
    pub total_matched: usize,
    /// 0 если ничего не найдено
    pub page_count: usize,
    pub current_page_items: Vec<R>,
    /// Номер страницы после ограничения диапазоном, начиная с 1
    pub current_page: usize,
    pub page_size: usize,
}

impl<R> ViewResult<R> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// Позиция первой записи страницы для подписи "11-20 of 25" (0 для пустого списка)
    pub fn first_item_number(&self) -> usize {
        if self.current_page_items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    pub fn last_item_number(&self) -> usize {
        if self.current_page_items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size + self.current_page_items.len()
        }
    }
}

impl<R: Clone> ViewResult<&R> {
    pub fn cloned(self) -> ViewResult<R> {
        ViewResult {
            total_matched: self.total_matched,
            page_count: self.page_count,
            current_page_items: self.current_page_items.into_iter().cloned().collect(),
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }
}

/// ceil(total / page_size), 0 для пустого списка
pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 {
        0
    } else {
        total.div_ceil(page_size.max(1))
    }
}

/// Ограничивает номер страницы диапазоном [1, max(page_count, 1)]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Срез страницы из отфильтрованного списка.
///
/// Номер страницы вне диапазона не является ошибкой: он ограничивается.
pub fn paginate<R: Clone>(filtered: &[R], page: usize, page_size: usize) -> ViewResult<R> {
    let page_size = page_size.max(1);
    let total_matched = filtered.len();
    let page_count = page_count(total_matched, page_size);
    let current_page = clamp_page(page, page_count);

    let start = ((current_page - 1) * page_size).min(total_matched);
    let end = (start + page_size).min(total_matched);

    ViewResult {
        total_matched,
        page_count,
        current_page_items: filtered[start..end].to_vec(),
        current_page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_middle_and_last_page() {
        let items = numbers(25);
        let view = paginate(&items, 2, 10);
        assert_eq!(view.current_page_items, (11..=20).collect::<Vec<_>>());
        assert_eq!(view.page_count, 3);
        assert!(view.has_previous());
        assert!(view.has_next());

        let view = paginate(&items, 3, 10);
        assert_eq!(view.current_page_items, vec![21, 22, 23, 24, 25]);
        assert_eq!(view.first_item_number(), 21);
        assert_eq!(view.last_item_number(), 25);
        assert!(!view.has_next());
    }

    #[test]
    fn test_empty_list_clamps_to_first_page() {
        let items: Vec<usize> = Vec::new();
        for page in [0, 1, 5, usize::MAX] {
            let view = paginate(&items, page, 10);
            assert_eq!(view.current_page, 1);
            assert_eq!(view.page_count, 0);
            assert!(view.current_page_items.is_empty());
            assert_eq!(view.first_item_number(), 0);
        }
    }

    #[test]
    fn test_page_past_end_clamps_to_last() {
        let items = numbers(25);
        let view = paginate(&items, 99, 10);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.current_page_items.len(), 5);

        let view = paginate(&items, 0, 10);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_pages_cover_every_item_once_in_order() {
        let items = numbers(47);
        let page_size = 7;
        let pages = page_count(items.len(), page_size);
        let mut joined = Vec::new();
        for page in 1..=pages {
            let view = paginate(&items, page, page_size);
            assert!(view.current_page_items.len() <= page_size);
            joined.extend(view.current_page_items);
        }
        assert_eq!(joined, items);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let items = numbers(3);
        let view = paginate(&items, 2, 0);
        assert_eq!(view.page_size, 1);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.current_page_items, vec![2]);
    }
}
