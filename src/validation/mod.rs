use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structural email check against a versioned grammar.
///
/// # Examples
/// ```
/// use user_service::validation::email::is_valid_email;
///
/// assert!(is_valid_email("bob@yandex.com"));
/// assert!(!is_valid_email("bob"));
/// ```
pub mod email;

/// Minimum-strength password policy.
///
/// # Examples
/// ```
/// use user_service::validation::password::is_valid_password;
///
/// assert!(is_valid_password("1amAp0k3m0n%"));
/// assert!(!is_valid_password("12345"));
/// ```
pub mod password;

pub use email::is_valid_email;
pub use password::is_valid_password;

/// Message carried by a successful [`Verdict`].
pub const SUCCESS_MESSAGE: &str = "User created successfully";

/// Raw `{email, password}` pair as submitted by a client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Reasons a [`Credentials`] pair can be rejected.
///
/// The string form of each variant is part of the public HTTP contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Email is malformed, password is fine.
    WrongEmail,
    /// Password is weak, email is fine.
    WrongPassword,
    /// Both fields are rejected.
    IncorrectData,
}

impl ValidationError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongEmail => "Wrong email",
            Self::WrongPassword => "Wrong password",
            Self::IncorrectData => "Incorrect data",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Validation Verdict
///
/// Outcome of [`validate_user_input`].
///
/// Exactly one of `message` and `error` is set, and `is_validated` is `true`
/// iff `message` is set. Fields are private so the pair can only be built
/// through [`Verdict::accepted`] and [`Verdict::rejected`].
///
/// ## Example JSON
/// ```json
/// { "isValidated": false, "message": null, "error": "Wrong email" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    is_validated: bool,
    message: Option<String>,
    error: Option<String>,
}

impl Verdict {
    pub fn accepted() -> Self {
        Self {
            is_validated: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
            error: None,
        }
    }

    pub fn rejected(error: ValidationError) -> Self {
        Self {
            is_validated: false,
            message: None,
            error: Some(error.as_str().to_string()),
        }
    }

    pub fn is_validated(&self) -> bool {
        self.is_validated
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Classifies a credential pair.
///
/// | email | password | result |
/// |---|---|---|
/// | valid | valid | accepted, `"User created successfully"` |
/// | invalid | valid | `"Wrong email"` |
/// | valid | invalid | `"Wrong password"` |
/// | invalid | invalid | `"Incorrect data"` |
pub fn check_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    let email_ok = is_valid_email(&credentials.email);
    let password_ok = is_valid_password(&credentials.password);

    match (email_ok, password_ok) {
        (true, true) => Ok(()),
        (false, true) => Err(ValidationError::WrongEmail),
        (true, false) => Err(ValidationError::WrongPassword),
        (false, false) => Err(ValidationError::IncorrectData),
    }
}

/// Validates user input and always returns a complete [`Verdict`].
///
/// # Examples
/// ```
/// use user_service::validation::{Credentials, validate_user_input};
///
/// let verdict = validate_user_input(&Credentials {
///     email: "bob@yandex.com".to_string(),
///     password: "1amAp0k3m0n%".to_string(),
/// });
/// assert!(verdict.is_validated());
/// assert_eq!(verdict.message(), Some("User created successfully"));
/// assert_eq!(verdict.error(), None);
/// ```
pub fn validate_user_input(credentials: &Credentials) -> Verdict {
    match check_credentials(credentials) {
        Ok(()) => Verdict::accepted(),
        Err(e) => Verdict::rejected(e),
    }
}
