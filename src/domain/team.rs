use serde::{Deserialize, Serialize};

use crate::domain::types::{TeamId, TeamName, TypeConstraintError};

/// Group a member may belong to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
}

/// Payload for creating a [`Team`].
#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: TeamName,
}

impl NewTeam {
    #[must_use]
    pub fn new(name: TeamName) -> Self {
        Self { name }
    }

    /// Builds a payload from a raw name, validating it.
    pub fn try_new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(TeamName::new(name)?))
    }
}
