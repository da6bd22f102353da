//! Размер страницы списков в localStorage

const PAGE_SIZE_KEY_PREFIX: &str = "list_page_size:";

pub fn page_size_key(screen: &str) -> String {
    format!("{}{}", PAGE_SIZE_KEY_PREFIX, screen)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_page_size(screen: &str) -> Option<usize> {
    let raw = local_storage()?.get_item(&page_size_key(screen)).ok().flatten()?;
    parse_page_size(&raw)
}

pub fn save_page_size(screen: &str, page_size: usize) {
    if let Some(storage) = local_storage() {
        if storage
            .set_item(&page_size_key(screen), &page_size.to_string())
            .is_err()
        {
            log::warn!("failed to save page size for {}", screen);
        }
    }
}

fn parse_page_size(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("25"), Some(25));
        assert_eq!(parse_page_size(" 50 "), Some(50));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("abc"), None);
        assert_eq!(page_size_key("members"), "list_page_size:members");
    }
}
