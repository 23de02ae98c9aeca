use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ClinicError;

/// Permission class of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Staff,
    Doctor,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staff" => Ok(Role::Staff),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(ClinicError::Authorization(format!("Unknown role: {}", other))),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Every gated call the gateway can make on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewSlots,
    ViewAvailability,
    ListReservations,
    CreateSlot,
    BookSlot,
    ListDoctors,
    ListPatients,
}

impl Operation {
    pub fn permitted_roles(&self) -> &'static [Role] {
        match self {
            Operation::ViewSlots | Operation::ViewAvailability => &[Role::Staff, Role::Patient],
            Operation::ListReservations | Operation::CreateSlot | Operation::ListPatients => &[Role::Staff],
            Operation::BookSlot => &[Role::Patient, Role::Staff],
            Operation::ListDoctors => &[Role::Staff, Role::Doctor, Role::Patient],
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Operation::ViewSlots => "view slots",
            Operation::ViewAvailability => "view slot availability",
            Operation::ListReservations => "list reservations",
            Operation::CreateSlot => "create slots",
            Operation::BookSlot => "book appointments",
            Operation::ListDoctors => "list doctors",
            Operation::ListPatients => "list patients",
        }
    }
}

/// Credentials of the current caller, established once at session start and passed into
/// every operation that needs authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub access_token: String,
    pub role: Role,
    pub user_id: Option<i64>,
}

impl SessionContext {
    pub fn new(access_token: impl Into<String>, role: Role) -> Self {
        Self {
            access_token: access_token.into(),
            role,
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// Fails before any request is built: `Unauthenticated` when the token is missing,
    /// `Authorization` when the role may not perform `operation`.
    pub fn authorize(&self, operation: Operation) -> Result<(), ClinicError> {
        if !self.has_token() {
            return Err(ClinicError::Unauthenticated("Missing access token".to_string()));
        }

        if !operation.permitted_roles().contains(&self.role) {
            return Err(ClinicError::Authorization(format!(
                "Role '{}' is not permitted to {}",
                self.role,
                operation.describe()
            )));
        }

        Ok(())
    }
}

/// Body returned by the backend's login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl From<LoginResponse> for SessionContext {
    fn from(login: LoginResponse) -> Self {
        Self {
            access_token: login.access_token,
            role: login.role,
            user_id: login.user_id,
        }
    }
}
