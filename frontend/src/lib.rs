use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;

pub use api::{ApiError, AuthSession, Authenticator, LoginRequest, SimulatedAuthenticator};
pub use components::forms::SelectOption;
pub use state::auth::provide_authenticator;

use pages::login::LoginPage;

fn announce_session(session: AuthSession) {
    log::info!("signed in as {} ({})", session.email, session.role);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sign in" />
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <LoginPage on_success=announce_session /> } />
                    <Route path="/login" view=|| view! { <LoginPage on_success=announce_session /> } />
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

/// Browser entry point: installs the panic hook and logger, resolves runtime
/// config in the background and mounts [`App`].
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::set_max_level(config::DEFAULT_LOG_LEVEL.to_level_filter());
    log::info!("Starting sign-in portal (wasm)");

    // Config only tunes the log level and the simulated delay, so mounting
    // does not wait for it.
    spawn_local(async move {
        let cfg = config::init().await;
        log::set_max_level(cfg.log_level().to_level_filter());
        log::info!("Runtime config initialized: {:?}", cfg);
    });

    mount_to_body(|| view! { <App /> });
}
