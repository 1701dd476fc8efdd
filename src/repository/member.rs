//! Repository implementation for members.

use diesel::prelude::*;

use crate::{
    domain::{
        member::{Member, NewMember},
        types::{MemberId, TeamId, Username},
    },
    models::member::{Member as DbMember, NewMember as DbNewMember},
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_members: Vec<DbMember>) -> RepositoryResult<Vec<Member>> {
    db_members
        .into_iter()
        .map(|db_member| Member::try_from(db_member).map_err(RepositoryError::from))
        .collect()
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let db_new_member: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&db_new_member)
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }

    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let db_member = diesel::update(members::table.find(member_id.get()))
            .set(members::team_id.eq(team_id.map(TeamId::get)))
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        db_member
            .map(|db_member| Member::try_from(db_member).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_members(&self) -> RepositoryResult<Vec<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_members = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }

    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_members = members::table
            .filter(members::username.eq(username.as_str()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }
}
