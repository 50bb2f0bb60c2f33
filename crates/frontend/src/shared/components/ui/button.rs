use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "button--primary",
            Self::Secondary => "button--secondary",
            Self::Danger => "button--danger",
            Self::Ghost => "button--ghost",
        }
    }
}

/// CSS class list for a button
pub fn button_class(variant: ButtonVariant, compact: bool) -> String {
    if compact {
        format!("button {} button--sm", variant.class())
    } else {
        format!("button {}", variant.class())
    }
}

/// Form and toolbar button. Row actions use the compact icon form.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Icon-sized padding for table rows
    #[prop(optional)]
    compact: bool,
    /// Submits the enclosing form instead of a plain click
    #[prop(optional)]
    submit: bool,
    #[prop(optional, into)] title: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=button_class(variant, compact)
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
