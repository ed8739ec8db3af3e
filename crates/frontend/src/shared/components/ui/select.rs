use leptos::prelude::*;

/// Select component with label and placeholder support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; the empty string selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder shown as the empty-value option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="input-group">
            {move || label.get().map(|l| view! { <label>{l}</label> })}
            <select
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
