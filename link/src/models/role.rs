use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access role assigned to every account.
///
/// Wire values use the server's SCREAMING_SNAKE_CASE spelling. Accounts
/// created before the role split may still carry the legacy `USER` value,
/// which deserializes as [`Role::Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    TeamLead,
    #[serde(alias = "USER")]
    Member,
}

impl Role {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::TeamLead => "Team Lead",
            Role::Member => "Member",
        }
    }

    /// Wire spelling of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::TeamLead => "TEAM_LEAD",
            Role::Member => "MEMBER",
        }
    }

    /// True for roles allowed to create, edit, and manage teams.
    pub fn can_manage_teams(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }

    /// True for the only role allowed to delete teams.
    pub fn can_delete_teams(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// True for roles allowed to certify completed tasks.
    pub fn can_certify_tasks(&self) -> bool {
        matches!(self, Role::Admin | Role::TeamLead | Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "TEAM_LEAD" | "TEAMLEAD" => Ok(Role::TeamLead),
            "MEMBER" | "USER" => Ok(Role::Member),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}
