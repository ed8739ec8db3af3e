use leptos::prelude::*;

/// Single summary figure on the dashboard.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Accent class suffix ("revenue", "quantity", "top")
    accent: &'static str,
    /// Formatted value text
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{accent}")>
            <h4 class="stat-card__label">{label}</h4>
            <h2 class="stat-card__value">{move || value.get()}</h2>
        </div>
    }
}
