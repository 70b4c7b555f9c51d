use leptos::prelude::*;

/// Native date picker; values are `yyyy-mm-dd`, empty when cleared.
#[component]
pub fn DateField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>{label}</label>
            <input
                id=input_id
                type="date"
                class="form__input form__input--date"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
