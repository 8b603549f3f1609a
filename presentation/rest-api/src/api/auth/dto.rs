use poem_openapi::Object;

use business::domain::user::use_cases::check_status::SessionStatus;
use business::domain::user::use_cases::login::LoggedInUser;
use business::domain::user::use_cases::register::RegisteredUser;

#[derive(Debug, Clone, Object)]
pub struct RegisterUserRequest {
    /// Account email, unique
    pub email: String,
    /// Password, at least 6 characters
    pub password: String,
    /// Display name
    pub full_name: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginUserRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Registration echo. Never carries the password hash or the active flag.
#[derive(Debug, Clone, Object)]
pub struct RegisteredUserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    /// Fresh session token
    pub token: String,
}

impl From<RegisteredUser> for RegisteredUserResponse {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            full_name: user.full_name,
            roles: user.roles,
            token: user.token,
        }
    }
}

/// Login echo: email and token only.
#[derive(Debug, Clone, Object)]
pub struct LoggedInUserResponse {
    pub email: String,
    /// Fresh session token
    pub token: String,
}

impl From<LoggedInUser> for LoggedInUserResponse {
    fn from(user: LoggedInUser) -> Self {
        Self {
            email: user.email,
            token: user.token,
        }
    }
}

/// Session echo with identifier and hash stripped.
#[derive(Debug, Clone, Object)]
pub struct SessionStatusResponse {
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    /// Fresh session token
    pub token: String,
}

impl From<SessionStatus> for SessionStatusResponse {
    fn from(status: SessionStatus) -> Self {
        Self {
            email: status.email,
            full_name: status.full_name,
            roles: status.roles,
            token: status.token,
        }
    }
}
