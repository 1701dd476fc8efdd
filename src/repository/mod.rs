//! Persistence traits and their Diesel-backed implementation.
//!
//! Services depend on the narrow reader/writer traits below so they can be
//! exercised against mocks or the in-memory repository in tests.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        condition::Condition,
        member::{Member, NewMember},
        member_team::MemberTeam,
        team::{NewTeam, Team},
        types::{MemberId, TeamId, Username},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod memory;
pub mod member;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod search;
pub mod team;

/// Diesel repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_members(&self) -> RepositoryResult<Vec<Member>>;
    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
}

pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member>;
}

/// Reads members left-joined with their team.
///
/// Members without a team are always part of the result, with `None` team
/// fields.
pub trait MemberTeamReader {
    /// Loads one page of rows matching `condition` (`None` means no filter).
    fn fetch_member_teams(
        &self,
        condition: Option<&Condition>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<MemberTeam>>;

    /// Loads one page together with the total match count in a single round
    /// trip.
    fn fetch_member_teams_with_total(
        &self,
        condition: Option<&Condition>,
        page: &PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeam>)>;

    /// Loads every row matching `condition`, ordered by member id.
    fn list_member_teams(&self, condition: Option<&Condition>) -> RepositoryResult<Vec<MemberTeam>>;
}

/// Counts distinct members matching a condition.
pub trait MemberCounter {
    /// With `include_join == false` the team table is not joined. Callers must
    /// only do so when `condition` does not reference team attributes.
    fn count_members(
        &self,
        condition: Option<&Condition>,
        include_join: bool,
    ) -> RepositoryResult<usize>;
}
