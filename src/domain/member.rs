use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, TeamId, TypeConstraintError, Username};

/// Person registered in the system, optionally attached to a team.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

/// Payload for creating a [`Member`].
#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(username: Username, age: Age, team_id: Option<TeamId>) -> Self {
        Self {
            username,
            age,
            team_id,
        }
    }

    /// Builds a payload from raw values, validating each of them.
    pub fn try_new(
        username: impl Into<String>,
        age: i32,
        team_id: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            Username::new(username)?,
            Age::new(age)?,
            team_id.map(TeamId::new).transpose()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_validates_fields() {
        let member = NewMember::try_new(" member1 ", 10, Some(1)).expect("valid member");
        assert_eq!(member.username.as_str(), "member1");
        assert_eq!(member.age.get(), 10);
        assert_eq!(member.team_id.map(TeamId::get), Some(1));

        assert!(matches!(
            NewMember::try_new("member1", -1, None),
            Err(TypeConstraintError::NegativeAge)
        ));
        assert!(matches!(
            NewMember::try_new("member1", 1, Some(0)),
            Err(TypeConstraintError::NonPositiveId)
        ));
    }
}
