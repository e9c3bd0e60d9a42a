//! Administrator account. Only the fixture loader creates users; no
//! endpoint exposes them.

use super::password::Password;
use crate::config::ROLE_ADMIN;

/// User as written by the fixture loader.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub roles: Vec<String>,
    pub password: Password,
}

impl NewUser {
    /// Administrator with a freshly hashed password.
    pub fn admin(email: impl Into<String>, password: Password) -> Self {
        Self {
            email: email.into(),
            roles: vec![ROLE_ADMIN.to_string()],
            password,
        }
    }
}
