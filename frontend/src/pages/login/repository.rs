use crate::api::{ApiError, AuthSession, Authenticator, LoginRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    authenticator: Rc<dyn Authenticator>,
}

impl LoginRepository {
    pub fn new_with_authenticator(authenticator: Rc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, ApiError> {
        self.authenticator.authenticate(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{SimulatedAuthenticator, REJECTED_EMAIL, REJECTION_MESSAGE};
    use std::time::Duration;

    fn repository() -> LoginRepository {
        LoginRepository::new_with_authenticator(Rc::new(SimulatedAuthenticator::with_delay(
            Duration::from_millis(1),
        )))
    }

    #[tokio::test]
    async fn login_returns_session_for_accepted_credentials() {
        let session = repository()
            .login(LoginRequest {
                email: "user@example.com".into(),
                password: "secret1".into(),
                role: "user".into(),
            })
            .await
            .expect("accepted");
        assert_eq!(session.email, "user@example.com");
        assert_eq!(session.role, "user");
    }

    #[tokio::test]
    async fn login_propagates_rejection() {
        let err = repository()
            .login(LoginRequest {
                email: REJECTED_EMAIL.into(),
                password: "secret1".into(),
                role: "admin".into(),
            })
            .await
            .expect_err("rejected");
        assert_eq!(err.error, REJECTION_MESSAGE);
    }
}
