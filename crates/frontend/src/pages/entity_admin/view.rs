use contracts::shared::metadata::FieldDescriptor;
use contracts::shared::record::{EntityRecord, RecordId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::controller::AdminController;
use super::state::{create_state, AdminState};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::{EntityApi, GlooTransport};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::config::config;
use crate::shared::entity_form::EntityForm;
use crate::shared::entity_table::EntityTable;
use crate::shared::icons::icon;

fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn EntityAdminPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = create_state(ctx.active_entity.get_untracked());
    let controller = AdminController::new(
        EntityApi::new(GlooTransport::new()),
        state,
        browser_confirm,
    );

    // Reload whenever the selected entity type changes
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            let kind = ctx.active_entity.get();
            let controller = controller.clone();
            spawn_local(async move {
                controller.select_entity_type(kind).await;
            });
        });
    }

    // Notices disappear on their own; one timer per notice
    let active_notice = Memo::new(move |_| state.with(AdminState::active_notice));
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            if let Some(notice_id) = active_notice.get() {
                let controller = controller.clone();
                let timeout = config().ui.notice_timeout_ms;
                spawn_local(async move {
                    TimeoutFuture::new(timeout).await;
                    controller.dismiss_notice(notice_id);
                });
            }
        });
    }

    let entity_type = Memo::new(move |_| state.with(|s| s.entity_type));
    let fields = Memo::new(move |_| -> &'static [FieldDescriptor] {
        state.with(|s| s.entity_type.schema().fields)
    });
    let records = Memo::new(move |_| state.with(|s| s.records.clone()));
    let target = Memo::new(move |_| state.with(|s| s.edit_target.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let notice = Memo::new(move |_| state.with(|s| s.notice.clone()));

    let refresh = {
        let controller = controller.clone();
        Callback::new(move |_: leptos::ev::MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move { controller.refresh().await });
        })
    };
    let on_save = {
        let controller = controller.clone();
        Callback::new(move |payload: EntityRecord| {
            let controller = controller.clone();
            spawn_local(async move { controller.save(payload).await });
        })
    };
    let on_cancel_edit = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.clear_edit())
    };
    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |record: EntityRecord| controller.edit(record))
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |id: RecordId| {
            let controller = controller.clone();
            spawn_local(async move { controller.delete(id).await });
        })
    };
    let on_cancel = {
        let controller = controller.clone();
        Callback::new(move |id: RecordId| {
            let controller = controller.clone();
            spawn_local(async move { controller.cancel(id).await });
        })
    };
    let on_receive = {
        let controller = controller.clone();
        Callback::new(move |id: RecordId| {
            let controller = controller.clone();
            spawn_local(async move { controller.receive(id).await });
        })
    };

    let form_title = move || {
        let element = entity_type.get().element_name();
        if target.with(Option::is_some) {
            format!("Editar {}", element)
        } else {
            format!("Nuevo {}", element)
        }
    };
    let showing_placeholder = move || loading.get() && records.with(Vec::is_empty);

    view! {
        <div class="entity-admin">
            <PageHeader
                title="Panel de administración"
                subtitle=Signal::derive(move || Some(entity_type.get().display_name().to_string()))
            >
                <Button variant=ButtonVariant::Secondary disabled=loading on_click=refresh>
                    {icon("refresh")}
                    "Refrescar"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

            <section class="entity-admin__form">
                <h2>{form_title}</h2>
                <EntityForm
                    fields=fields
                    target=target
                    disabled=loading
                    on_save=on_save
                    on_cancel=on_cancel_edit
                />
            </section>

            <section class="entity-admin__list">
                <h2>{move || format!("Lista de {}", entity_type.get().display_name())}</h2>
                <Show
                    when=move || !showing_placeholder()
                    fallback=|| view! { <div class="loading">"Cargando datos..."</div> }
                >
                    <EntityTable
                        records=records
                        entity_type=entity_type
                        disabled=loading
                        on_edit=on_edit
                        on_delete=on_delete
                        on_cancel=on_cancel
                        on_receive=on_receive
                    />
                </Show>
            </section>
        </div>
    }
}
