use leptos::*;

pub fn error_element_id(field_id: &str) -> String {
    format!("{}-error", field_id)
}

/// Message rendered below a single input.
#[component]
pub fn FieldErrorMessage(
    #[prop(into)] field_id: String,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let element_id = error_element_id(&field_id);
    view! {
        <Show when=move || error.with(|e| e.is_some()) fallback=|| ()>
            <p id=element_id.clone() class="mt-1 text-sm text-status-error-text">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Form-level message that is not tied to any input.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some()) fallback=|| ()>
            <p role="alert" class="mt-2 text-sm text-center text-status-error-text">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
