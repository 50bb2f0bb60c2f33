use contracts::enums::entity_kind::EntityKind;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Sistema de Gestión"</span>
            </div>
            <EntityTabs />
        </header>
    }
}

/// One button per entity type; the active one is highlighted
#[component]
pub fn EntityTabs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="entity-tabs">
            {EntityKind::all()
                .into_iter()
                .map(|kind| {
                    let is_active = move || ctx.active_entity.get() == kind;
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "entity-tabs__tab entity-tabs__tab--active"
                                } else {
                                    "entity-tabs__tab"
                                }
                            }
                            on:click=move |_| ctx.select_entity(kind)
                        >
                            {kind.schema().ui.icon.map(icon)}
                            <span>{kind.display_name()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
