use contracts::enums::entity_kind::EntityKind;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the selected entity type
const ENTITY_PARAM: &str = "entidad";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Entity type shown by the admin page
    pub active_entity: RwSignal<EntityKind>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_entity: RwSignal::new(EntityKind::default()),
        }
    }

    pub fn select_entity(&self, kind: EntityKind) {
        if self.active_entity.get_untracked() != kind {
            log::info!("Entity type: {}", kind);
            self.active_entity.set(kind);
        }
    }

    /// Restore the entity type from `?entidad=` and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(kind) = entity_from_query(&search) {
            self.active_entity.set(kind);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", query_for(this.active_entity.get()));

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
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity type named by a `?entidad=...` query string, if any
pub fn entity_from_query(search: &str) -> Option<EntityKind> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ENTITY_PARAM)
        .and_then(|code| EntityKind::from_code(code))
}

/// Query string (without `?`) selecting `kind`
pub fn query_for(kind: EntityKind) -> String {
    serde_qs::to_string(&HashMap::from([(ENTITY_PARAM, kind.as_str())])).unwrap_or_default()
}
