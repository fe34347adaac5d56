use leptos::prelude::*;

/// Colored pill for status, payment, and sentiment values.
///
/// The variant strings come from the exhaustive `badge_variant()` methods on
/// the contracts enums, so every enum value has a style picked at compile
/// time.
#[component]
pub fn Badge(
    /// One of "primary", "success", "warning", "error", "neutral".
    #[prop(into)]
    variant: Signal<&'static str>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get() {
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
