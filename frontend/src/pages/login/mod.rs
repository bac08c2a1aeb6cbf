use crate::{api::AuthSession, components::forms::SelectOption};
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage(
    #[prop(optional)] roles: Option<&'static [SelectOption]>,
    #[prop(optional, into)] on_success: Option<Callback<AuthSession>>,
) -> impl IntoView {
    let roles = roles.unwrap_or(utils::ROLE_OPTIONS);
    view! { <LoginPanel roles=roles on_success=on_success /> }
}
