use crate::{
    api::AuthSession,
    components::{forms::SelectOption, layout::PageShell},
    pages::login::{
        components::{form::LoginForm, messages::LoginSuccessMessage},
        utils::LoginField,
        view_model::use_login_view_model,
    },
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(
    roles: &'static [SelectOption],
    #[prop(optional_no_strip)] on_success: Option<Callback<AuthSession>>,
) -> impl IntoView {
    let vm = use_login_view_model(roles, on_success);

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.dispatch_submit();
        })
    };

    let field_input = {
        let vm = vm.clone();
        move |field: LoginField| {
            let vm = vm.clone();
            Callback::new(move |value: String| vm.set_field(field, value))
        }
    };

    view! {
        <PageShell>
            <h1 class="text-2xl font-semibold text-center text-fg">"Login"</h1>
            <LoginSuccessMessage session=vm.session() />
            <LoginForm
                email=vm.email
                password=vm.password
                role=vm.role
                roles=vm.roles()
                email_error=vm.field_error(LoginField::Email)
                password_error=vm.field_error(LoginField::Password)
                role_error=vm.field_error(LoginField::Role)
                error=vm.error()
                pending=vm.pending()
                on_email_input=field_input(LoginField::Email)
                on_password_input=field_input(LoginField::Password)
                on_role_change=field_input(LoginField::Role)
                on_submit=handle_submit
            />
        </PageShell>
    }
}
