use serde::{Deserialize, Serialize};

use blueforge_core::{DomainError, DomainResult, UserId};

use crate::roles::Role;

/// Identity of a signed-in marketplace user.
///
/// Construction is decoupled from transport: whatever session or token layer
/// sits in front derives one of these and hands it to policy checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    user_id: UserId,
    display_name: String,
    role: Role,
}

impl Principal {
    pub fn new(user_id: UserId, display_name: impl Into<String>, role: Role) -> DomainResult<Self> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(DomainError::validation("display name cannot be empty"));
        }
        Ok(Self {
            user_id,
            display_name: display_name.trim().to_string(),
            role,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
