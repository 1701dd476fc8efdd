use serde::Serialize;

use crate::domain::types::{Age, MemberId, TeamId, TeamName, Username};

/// Flattened member row joined with its (optional) team.
///
/// Only ever produced as a query projection. Team fields are `None` for
/// members that do not belong to a team.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberTeam {
    pub member_id: MemberId,
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
    pub team_name: Option<TeamName>,
}
