use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Submit,
    Button,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Button => "button",
            ButtonType::Reset => "reset",
        }
    }
}

pub fn is_button_disabled(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

#[component]
pub fn SubmitButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.as_str()
            class=move || {
                format!(
                    "inline-flex w-full items-center justify-center rounded-md px-4 py-2 text-sm font-semibold shadow-sm transition-colors duration-200 disabled:opacity-50 {} {} {}",
                    if loading.get() { "cursor-not-allowed" } else { "disabled:cursor-not-allowed" },
                    variant.classes(),
                    class
                )
            }
            disabled=move || is_button_disabled(disabled.get(), loading.get())
            aria-busy=move || if loading.get() { "true" } else { "false" }
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span
                    class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"
                    aria-hidden="true"
                ></span>
            </Show>
            {children()}
        </button>
    }
}
