use crate::layout::registry::Section;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const SECTION_PARAM: &str = "section";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстанавливает раздел из `?section=...` и синхронизирует URL при переключении
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.active.get();
            let new_url = section_query(section);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, section: Section) {
        log::debug!("activate section: {}", section.key());
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn section_from_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(SECTION_PARAM)
        .and_then(|key| Section::from_key(key))
}

fn section_query(section: Section) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        SECTION_PARAM.to_string(),
        section.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_query_roundtrip() {
        let query = section_query(Section::BusinessReceived);
        assert_eq!(query, "?section=business_received");
        assert_eq!(section_from_query(&query), Some(Section::BusinessReceived));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        assert_eq!(section_from_query("?section=nope"), None);
        assert_eq!(section_from_query(""), None);
    }
}
