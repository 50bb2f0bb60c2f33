use contracts::shared::metadata::SelectOption;
use leptos::prelude::*;

/// Dropdown over a field's fixed option list, led by an empty "Seleccione..." entry
#[component]
pub fn Select(
    /// Used as `id`, `name` and the label's `for`
    id: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: &'static [SelectOption],
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let choices = options
        .iter()
        .map(|option| {
            let choice = option.value;
            view! {
                <option value=choice selected=move || value.with(|v| v == choice)>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <select
                id=id
                name=id
                class="form__select"
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.with(String::is_empty)>
                    "Seleccione..."
                </option>
                {choices}
            </select>
        </div>
    }
}
