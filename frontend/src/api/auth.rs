use crate::{
    api::types::{ApiError, AuthSession, LoginRequest},
    config,
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::time::Duration;

pub const REJECTED_EMAIL: &str = "error@example.com";
pub const REJECTION_MESSAGE: &str = "Login failed. Invalid credentials or role.";

/// Checks a set of credentials. Implementations resolve exactly once per call.
pub trait Authenticator {
    fn authenticate(
        &self,
        request: LoginRequest,
    ) -> LocalBoxFuture<'static, Result<AuthSession, ApiError>>;
}

/// Stand-in for a real sign-in endpoint: waits, then accepts every
/// credential set except [`REJECTED_EMAIL`].
#[derive(Debug, Clone, Default)]
pub struct SimulatedAuthenticator {
    delay: Option<Duration>,
}

impl SimulatedAuthenticator {
    /// Delay taken from runtime config at call time.
    pub fn new() -> Self {
        Self { delay: None }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay) }
    }

    fn delay(&self) -> Duration {
        self.delay.unwrap_or_else(|| config::current().auth_delay())
    }
}

pub fn simulated_outcome(request: &LoginRequest) -> Result<AuthSession, ApiError> {
    if request.email == REJECTED_EMAIL {
        return Err(ApiError::invalid_credentials(REJECTION_MESSAGE));
    }
    Ok(AuthSession {
        email: request.email.clone(),
        role: request.role.clone(),
    })
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

impl Authenticator for SimulatedAuthenticator {
    fn authenticate(
        &self,
        request: LoginRequest,
    ) -> LocalBoxFuture<'static, Result<AuthSession, ApiError>> {
        let delay = self.delay();
        async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            simulated_outcome(&request)
        }
        .boxed_local()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn simulated_authenticator_resolves_after_delay() {
        let auth = SimulatedAuthenticator::with_delay(Duration::from_millis(5));
        let session = auth
            .authenticate(LoginRequest {
                email: "user@example.com".into(),
                password: "secret1".into(),
                role: "editor".into(),
            })
            .await
            .expect("accepted");
        assert_eq!(session.role, "editor");
    }

    #[test]
    fn zero_delay_resolves_without_timer() {
        let auth = SimulatedAuthenticator::with_delay(Duration::ZERO);
        let result = futures::executor::block_on(auth.authenticate(LoginRequest {
            email: REJECTED_EMAIL.into(),
            password: "secret1".into(),
            role: "user".into(),
        }));
        assert!(result.is_err());
    }
}
