use contracts::enums::record_status::{CANCELADA, CANCELADO, COMPLETADA, COMPLETADO, PENDIENTE, RECIBIDA};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Badge variant for a record `estado`
pub fn status_variant(status: &str) -> &'static str {
    match status {
        PENDIENTE => "warning",
        COMPLETADO | COMPLETADA | RECIBIDA => "success",
        CANCELADO | CANCELADA => "error",
        _ => "neutral",
    }
}

/// Badge showing a record status with its colour
#[component]
pub fn StatusBadge(
    /// Status value, e.g. "pendiente"
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let variant = status_variant(&status);
    view! {
        <Badge variant=variant>{status}</Badge>
    }
}
