use contracts::shared::metadata::{FieldDescriptor, FieldKind};
use contracts::shared::record::EntityRecord;
use leptos::prelude::*;

use super::draft::{FormDraft, FormMode};
use crate::shared::components::ui::{Button, ButtonVariant, Input, Select, Textarea};

/// Create/edit form generated from field descriptors
///
/// The draft is rebuilt whenever `fields` or `target` change, so callers
/// should pass memoised signals.
#[component]
pub fn EntityForm(
    /// Descriptors of the active entity type
    #[prop(into)]
    fields: Signal<&'static [FieldDescriptor]>,
    /// Record being edited, `None` for create
    #[prop(into)]
    target: Signal<Option<EntityRecord>>,
    /// Disables every control (request in flight)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Receives the validated payload
    on_save: Callback<EntityRecord>,
    /// Leaves edit mode
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(FormDraft::for_target(
        fields.get_untracked(),
        target.get_untracked(),
    ));
    let validation_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let fields = fields.get();
        let target = target.get();
        draft.set(FormDraft::for_target(fields, target));
        validation_error.set(None);
    });

    let is_edit = move || draft.with(|d| d.mode() == FormMode::Edit);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.try_update(FormDraft::submit) {
            Some(Ok(payload)) => {
                validation_error.set(None);
                on_save.run(payload);
            }
            Some(Err(e)) => {
                log::warn!("{}", e);
                validation_error.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    view! {
        <form class="entity-form" on:submit=on_submit novalidate=true>
            <div class="entity-form__fields">
                {move || {
                    fields
                        .get()
                        .iter()
                        .map(|field| field_control(field, draft, disabled))
                        .collect_view()
                }}
            </div>

            {move || validation_error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}

            <div class="entity-form__actions">
                <Button submit=true disabled=disabled>
                    {move || if is_edit() { "Actualizar" } else { "Guardar" }}
                </Button>
                <Show when=is_edit>
                    <Button
                        variant=ButtonVariant::Secondary
                        disabled=disabled
                        on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_cancel.run(()))
                    >
                        "Cancelar"
                    </Button>
                </Show>
            </div>
        </form>
    }
}

fn field_control(
    field: &'static FieldDescriptor,
    draft: RwSignal<FormDraft>,
    disabled: Signal<bool>,
) -> AnyView {
    let name = field.name;
    let value = Signal::derive(move || draft.with(|d| d.display_value(name)));
    let on_input = Callback::new(move |raw: String| {
        draft.update(|d| {
            d.update_field(name, &raw);
        });
    });

    match field.kind {
        FieldKind::TextArea => view! {
            <Textarea
                id=name
                label=field.display_label()
                value=value
                on_input=on_input
                disabled=disabled
                required=field.is_required()
                rows=3
            />
        }
        .into_any(),
        FieldKind::Select => view! {
            <Select
                id=name
                label=field.display_label()
                value=value
                on_change=on_input
                options=field.options
                disabled=disabled
                required=field.is_required()
            />
        }
        .into_any(),
        kind => view! {
            <Input
                id=name
                label=field.display_label()
                input_type=kind.input_type().unwrap_or("text")
                value=value
                on_input=on_input
                disabled=disabled
                required=field.is_required()
                min=field.input_min()
                max=field.input_max()
            />
        }
        .into_any(),
    }
}
