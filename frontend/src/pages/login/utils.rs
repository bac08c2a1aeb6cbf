use crate::{
    api::LoginRequest,
    components::{forms::SelectOption, icons::Icon},
};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const ROLE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("user", "User").with_icon(Icon::USER),
    SelectOption::new("admin", "Administrator").with_icon(Icon::USER_SHIELD),
    SelectOption::new("editor", "Editor").with_icon(Icon::PEN),
];

pub const UNKNOWN_ROLE_MESSAGE: &str = "Please select a valid role.";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";

/// Requires a dotted domain ending in an alphabetic TLD of two or more
/// letters, so `user@localhost` and `a@b` are rejected.
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("");
    let labels: Vec<&str> = domain.split('.').collect();
    let tld = labels.last().copied().unwrap_or("");
    let well_formed = labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic());
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain")
            .with_message(Cow::Borrowed(INVALID_EMAIL_MESSAGE)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LoginFormValues {
    #[validate(
        length(min = 1, message = "Email is required."),
        email(message = "Invalid email address."),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
    #[validate(length(min = 1, message = "Please select a role."))]
    pub role: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Role,
}

impl LoginField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
            LoginField::Role => "role",
        }
    }
}

/// Per-field messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.role.is_none()
    }

    pub fn get(&self, field: LoginField) -> Option<&str> {
        match field {
            LoginField::Email => self.email.as_deref(),
            LoginField::Password => self.password.as_deref(),
            LoginField::Role => self.role.as_deref(),
        }
    }

    pub fn set(&mut self, field: LoginField, message: Option<String>) {
        match field {
            LoginField::Email => self.email = message,
            LoginField::Password => self.password = message,
            LoginField::Role => self.role = message,
        }
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let pick = |field: LoginField| {
            by_field.get(field.as_str()).and_then(|errs| {
                // An empty value also fails the format rule; "required" reads better.
                errs.iter()
                    .find(|e| e.code == "length")
                    .or_else(|| errs.first())
                    .map(message_of)
            })
        };
        FieldErrors {
            email: pick(LoginField::Email),
            password: pick(LoginField::Password),
            role: pick(LoginField::Role),
        }
    }
}

/// Runs every rule and reports all failures together.
pub fn validate_login(
    values: &LoginFormValues,
    roles: &[SelectOption],
) -> Result<LoginRequest, FieldErrors> {
    let mut errors = match values.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => FieldErrors::from(errors),
    };
    if errors.role.is_none() && !roles.iter().any(|option| option.value == values.role) {
        errors.role = Some(UNKNOWN_ROLE_MESSAGE.to_string());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest {
        email: values.email.clone(),
        password: values.password.clone(),
        role: values.role.clone(),
    })
}

pub fn validate_field(
    field: LoginField,
    values: &LoginFormValues,
    roles: &[SelectOption],
) -> Option<String> {
    match validate_login(values, roles) {
        Ok(_) => None,
        Err(errors) => errors.get(field).map(str::to_string),
    }
}
