use crate::api::AuthSession;
use leptos::*;

#[component]
pub fn LoginSuccessMessage(#[prop(into)] session: Signal<Option<AuthSession>>) -> impl IntoView {
    view! {
        <Show when=move || session.with(|s| s.is_some()) fallback=|| ()>
            <div
                role="status"
                class="rounded-md border border-status-success-border bg-status-success-bg p-3 text-sm text-status-success-text"
            >
                <p class="font-semibold">"Login successful!"</p>
                <p>
                    {move || session.get().map(|s| format!("Email: {}", s.email)).unwrap_or_default()}
                </p>
                <p>
                    {move || session.get().map(|s| format!("Role: {}", s.role)).unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}
