//! Diesel models representing members.

use diesel::prelude::*;

use crate::domain::member::{Member as DomainMember, NewMember as DomainNewMember};
use crate::domain::types::{Age, MemberId, TeamId, TypeConstraintError, Username};
use crate::models::team::Team;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::members)]
#[diesel(belongs_to(Team, foreign_key = team_id))]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub username: &'a str,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::try_from(member.id)?,
            username: Username::new(member.username)?,
            age: Age::try_from(member.age)?,
            team_id: member.team_id.map(TeamId::try_from).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_str(),
            age: member.age.get(),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}
