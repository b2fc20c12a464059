use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::auth::application::domain::entities::{Role, UserView};
use crate::shared::validation::ValidationIssue;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 50;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_FULL_NAME_LEN: usize = 100;

/// Registration input that passed field validation.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    full_name: String,
    role: Role,
    assigned_area: Option<String>,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
        full_name: String,
        role: Option<String>,
        assigned_area: Option<String>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let username = username.trim().to_string();
        if !is_valid_username(&username) {
            issues.push(ValidationIssue::new(
                "username",
                "Username must be 3-50 characters of letters, digits, '_', '.' or '-'",
            ));
        }

        let email = email.trim().to_lowercase();
        if email.is_empty() {
            issues.push(ValidationIssue::new("email", "Email is required"));
        } else if !EmailAddress::is_valid(&email) {
            issues.push(ValidationIssue::new("email", "Invalid email format"));
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            issues.push(ValidationIssue::new(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        } else if !password.chars().any(|c| c.is_ascii_alphabetic())
            || !password.chars().any(|c| c.is_ascii_digit())
        {
            issues.push(ValidationIssue::new(
                "password",
                "Password must contain a letter and a digit",
            ));
        }

        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            issues.push(ValidationIssue::new("fullName", "Full name is required"));
        } else if full_name.chars().count() > MAX_FULL_NAME_LEN {
            issues.push(ValidationIssue::new(
                "fullName",
                format!("Full name must be at most {} characters", MAX_FULL_NAME_LEN),
            ));
        }

        let role = match role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => Some(Role::CommunityVolunteer),
            Some(raw) => match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    issues.push(ValidationIssue::new("role", e.to_string()));
                    None
                }
            },
        };

        let assigned_area = assigned_area
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        match role {
            Some(role) if issues.is_empty() => Ok(Self {
                username,
                email,
                password,
                full_name,
                role,
                assigned_area,
            }),
            _ => Err(issues),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn assigned_area(&self) -> Option<&str> {
        self.assigned_area.as_deref()
    }
}

fn is_valid_username(username: &str) -> bool {
    (MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Role {0} cannot be self-assigned")]
    RoleNotAllowed(Role),

    #[error("Username or email already registered")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError>;
}
