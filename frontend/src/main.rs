#[cfg(target_arch = "wasm32")]
fn main() {
    signin_portal_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "signin-portal-frontend runs in the browser; build it for wasm32-unknown-unknown (e.g. `trunk serve`)"
    );
}
