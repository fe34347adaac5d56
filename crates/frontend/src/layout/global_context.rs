use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Storefront,
    Admin,
}

impl Page {
    pub fn code(&self) -> &'static str {
        match self {
            Page::Storefront => "shop",
            Page::Admin => "admin",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "shop" => Some(Page::Storefront),
            "admin" => Some(Page::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::default()),
        }
    }

    /// Restore the active page from the URL query string and mirror every
    /// subsequent switch back into it, so a reload lands on the same page.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|code| Page::from_code(code)) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.code().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed
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

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_codes_round_trip() {
        assert_eq!(Page::from_code(Page::Admin.code()), Some(Page::Admin));
        assert_eq!(Page::from_code(Page::Storefront.code()), Some(Page::Storefront));
        assert_eq!(Page::from_code("checkout"), None);
    }
}
