use crate::api::{Authenticator, AuthSession, SimulatedAuthenticator};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    pub is_authenticated: bool,
}

fn create_auth_context() -> AuthContext {
    create_signal(AuthState::default())
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(create_auth_context)
}

pub fn record_session(set_auth_state: WriteSignal<AuthState>, session: AuthSession) {
    set_auth_state.update(|state| {
        state.session = Some(session);
        state.is_authenticated = true;
    });
}

/// Makes `authenticator` the one used by sign-in forms below this point.
pub fn provide_authenticator(authenticator: Rc<dyn Authenticator>) {
    provide_context::<Rc<dyn Authenticator>>(authenticator);
}

pub fn use_authenticator() -> Rc<dyn Authenticator> {
    use_context::<Rc<dyn Authenticator>>()
        .unwrap_or_else(|| Rc::new(SimulatedAuthenticator::new()))
}
