use leptos::prelude::*;

/// Single KPI tile: caption above a large value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <h4 class="stat-card__label">{label}</h4>
                <p class="stat-card__value">{move || value.get()}</p>
            </div>
        </div>
    }
}
