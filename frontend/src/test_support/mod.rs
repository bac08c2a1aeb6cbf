#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiError, AuthSession, Authenticator, LoginRequest};
    use futures::{
        channel::oneshot,
        future::{FutureExt, LocalBoxFuture},
    };
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    type Gate = oneshot::Receiver<Result<AuthSession, ApiError>>;

    /// Authenticator whose calls stay pending until the test resolves them.
    /// Each call consumes the oldest gate handed out by [`GatedAuthenticator::gate`].
    #[derive(Default)]
    pub struct GatedAuthenticator {
        calls: Cell<usize>,
        gates: RefCell<VecDeque<Gate>>,
        requests: RefCell<Vec<LoginRequest>>,
    }

    impl GatedAuthenticator {
        pub fn gate(&self) -> oneshot::Sender<Result<AuthSession, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }

        pub fn requests(&self) -> Vec<LoginRequest> {
            self.requests.borrow().clone()
        }
    }

    impl Authenticator for GatedAuthenticator {
        fn authenticate(
            &self,
            request: LoginRequest,
        ) -> LocalBoxFuture<'static, Result<AuthSession, ApiError>> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(request);
            let gate = self.gates.borrow_mut().pop_front();
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(ApiError::unknown("gate dropped"))),
                    None => Err(ApiError::unknown("no gate prepared")),
                }
            }
            .boxed_local()
        }
    }
}
