use super::{
    repository::LoginRepository,
    utils::{validate_field, validate_login, FieldErrors, LoginField, LoginFormValues},
};
use crate::{
    api::{ApiError, AuthSession, LoginRequest},
    components::forms::SelectOption,
    state::auth::{self, AuthState},
};
use leptos::*;

const FALLBACK_FAILURE_MESSAGE: &str = "Login failed.";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(AuthSession),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmissionState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<AuthSession> {
        match self {
            SubmissionState::Succeeded(session) => Some(session.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another attempt was still in flight; nothing happened.
    AlreadyPending,
    Invalid(FieldErrors),
    Succeeded(AuthSession),
    Failed(ApiError),
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub submission: RwSignal<SubmissionState>,
    attempted: RwSignal<bool>,
    roles: &'static [SelectOption],
    repository: LoginRepository,
    set_auth: WriteSignal<AuthState>,
    on_success: Option<Callback<AuthSession>>,
}

impl LoginViewModel {
    pub fn new(
        repository: LoginRepository,
        roles: &'static [SelectOption],
        set_auth: WriteSignal<AuthState>,
        on_success: Option<Callback<AuthSession>>,
    ) -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(String::new()),
            field_errors: create_rw_signal(FieldErrors::default()),
            submission: create_rw_signal(SubmissionState::Idle),
            attempted: create_rw_signal(false),
            roles,
            repository,
            set_auth,
            on_success,
        }
    }

    pub fn roles(&self) -> &'static [SelectOption] {
        self.roles
    }

    pub fn values(&self) -> LoginFormValues {
        LoginFormValues {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            role: self.role.get_untracked(),
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        let submission = self.submission;
        Signal::derive(move || submission.with(SubmissionState::is_pending))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let submission = self.submission;
        Signal::derive(move || submission.with(SubmissionState::error_message))
    }

    pub fn session(&self) -> Signal<Option<AuthSession>> {
        let submission = self.submission;
        Signal::derive(move || submission.with(SubmissionState::session))
    }

    pub fn field_error(&self, field: LoginField) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    fn field_signal(&self, field: LoginField) -> RwSignal<String> {
        match field {
            LoginField::Email => self.email,
            LoginField::Password => self.password,
            LoginField::Role => self.role,
        }
    }

    /// Stores a new field value. Once a submit has been attempted the field
    /// is re-validated so its message tracks the edit.
    pub fn set_field(&self, field: LoginField, value: String) {
        self.field_signal(field).set(value);
        if self.attempted.get_untracked() {
            let message = validate_field(field, &self.values(), self.roles);
            self.field_errors.update(|errors| errors.set(field, message));
        }
    }

    /// Validates and moves to `Pending`. Returns the request to send, or why
    /// no request should be sent.
    pub fn begin_submit(&self) -> Result<LoginRequest, SubmitOutcome> {
        if self.submission.with_untracked(SubmissionState::is_pending) {
            log::debug!("login submit ignored: previous attempt still pending");
            return Err(SubmitOutcome::AlreadyPending);
        }
        self.attempted.set(true);
        match validate_login(&self.values(), self.roles) {
            Ok(request) => {
                log::info!("login submit started for {} as {}", request.email, request.role);
                batch(|| {
                    self.field_errors.set(FieldErrors::default());
                    self.submission.set(SubmissionState::Pending);
                });
                Ok(request)
            }
            Err(errors) => {
                log::debug!("login submit rejected by validation: {:?}", errors);
                self.field_errors.set(errors.clone());
                Err(SubmitOutcome::Invalid(errors))
            }
        }
    }

    pub fn finish_submit(&self, result: Result<AuthSession, ApiError>) -> SubmitOutcome {
        match result {
            Ok(session) => {
                log::info!("login succeeded for {} as {}", session.email, session.role);
                batch(|| {
                    self.submission
                        .set(SubmissionState::Succeeded(session.clone()));
                    auth::record_session(self.set_auth, session.clone());
                });
                if let Some(callback) = self.on_success {
                    callback.call(session.clone());
                }
                SubmitOutcome::Succeeded(session)
            }
            Err(err) => {
                log::warn!("login failed ({}): {}", err.code, err.error);
                let message = if err.error.trim().is_empty() {
                    FALLBACK_FAILURE_MESSAGE.to_string()
                } else {
                    err.error.clone()
                };
                self.submission.set(SubmissionState::Failed(message));
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = self.repository.login(request).await;
        self.finish_submit(result)
    }

    pub fn dispatch_submit(&self) {
        let vm = self.clone();
        spawn_local(async move {
            vm.submit().await;
        });
    }
}

pub fn use_login_view_model(
    roles: &'static [SelectOption],
    on_success: Option<Callback<AuthSession>>,
) -> LoginViewModel {
    let repository = LoginRepository::new_with_authenticator(auth::use_authenticator());
    let (_auth, set_auth) = auth::use_auth();
    LoginViewModel::new(repository, roles, set_auth, on_success)
}
