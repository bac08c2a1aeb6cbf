use crate::components::{
    common::SubmitButton,
    error::InlineErrorMessage,
    forms::{InputKind, SelectField, SelectOption, TextField},
    icons::Icon,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] role: Signal<String>,
    roles: &'static [SelectOption],
    #[prop(into)] email_error: Signal<Option<String>>,
    #[prop(into)] password_error: Signal<Option<String>>,
    #[prop(into)] role_error: Signal<Option<String>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_role_change: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="w-full space-y-4" novalidate=true on:submit=move |ev| on_submit.call(ev)>
            <TextField
                id="email"
                label="Email Address"
                kind=InputKind::Email
                left_icon=Icon::ENVELOPE
                value=email
                on_input=on_email_input
                error=email_error
                disabled=pending
                placeholder="you@example.com"
                attr:autocomplete="email"
            />
            <TextField
                id="password"
                label="Password"
                kind=InputKind::Password
                left_icon=Icon::KEY
                value=password
                on_input=on_password_input
                error=password_error
                disabled=pending
                placeholder="••••••••"
                attr:autocomplete="current-password"
            />
            <SelectField
                id="role"
                label="Login As"
                options=roles
                placeholder="Select a role"
                trigger_left_icon=Icon::USERS
                value=role
                on_change=on_role_change
                disabled=pending
                error=role_error
            />
            <SubmitButton loading=pending disabled=pending class="mt-2">
                "Sign In"
            </SubmitButton>
            <InlineErrorMessage error=error />
        </form>
    }
}
