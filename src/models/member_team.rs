//! Projection of a member left-joined with its team.

use diesel::prelude::*;

use crate::domain::member_team::MemberTeam as DomainMemberTeam;
use crate::domain::types::{Age, MemberId, TeamId, TeamName, TypeConstraintError, Username};

/// Row shape of `members LEFT JOIN teams`; team columns are nullable.
#[derive(Debug, Clone, Queryable)]
pub struct MemberTeam {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<MemberTeam> for DomainMemberTeam {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeam) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: MemberId::try_from(row.member_id)?,
            username: Username::new(row.username)?,
            age: Age::try_from(row.age)?,
            team_id: row.team_id.map(TeamId::try_from).transpose()?,
            team_name: row.team_name.map(TeamName::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_without_team_keeps_nulls() {
        let row = MemberTeam {
            member_id: 5,
            username: "loner".into(),
            age: 33,
            team_id: None,
            team_name: None,
        };
        let domain = DomainMemberTeam::try_from(row).expect("valid row");
        assert_eq!(domain.member_id.get(), 5);
        assert_eq!(domain.team_id, None);
        assert_eq!(domain.team_name, None);
    }

    #[test]
    fn row_with_team_into_domain() {
        let row = MemberTeam {
            member_id: 1,
            username: "member1".into(),
            age: 10,
            team_id: Some(1),
            team_name: Some("teamA".into()),
        };
        let domain = DomainMemberTeam::try_from(row).expect("valid row");
        assert_eq!(domain.team_id.map(TeamId::get), Some(1));
        assert_eq!(domain.team_name.as_deref(), Some("teamA"));
    }
}
