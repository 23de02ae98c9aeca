use serde::{Deserialize, Serialize};

use shared_models::auth::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Role the user selected on the login form. Login fails if the backend disagrees.
    #[serde(default)]
    pub expected_role: Option<Role>,
}

/// OAuth2 password-grant form expected by the backend.
#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrantForm<'a> {
    pub grant_type: &'static str,
    pub username: &'a str,
    pub password: &'a str,
    pub scope: &'static str,
    pub client_id: &'static str,
    pub client_secret: &'static str,
}

impl<'a> PasswordGrantForm<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self {
            grant_type: "password",
            username,
            password,
            scope: "",
            client_id: "",
            client_secret: "",
        }
    }
}
