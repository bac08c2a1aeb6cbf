use leptos::*;

/// Full-viewport container centering a fixed-width card.
#[component]
pub fn PageShell(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] card_class: String,
    #[prop(optional, into)] content_class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex flex-col items-center justify-center w-full h-screen bg-surface {}",
            class
        )>
            <div class=format!(
                "w-[300px] rounded-md border border-border bg-surface-elevated shadow-sm {}",
                card_class
            )>
                <div class=format!("p-4 flex flex-col gap-4 {}", content_class)>
                    {children()}
                </div>
            </div>
        </div>
    }
}
