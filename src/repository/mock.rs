//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::condition::Condition;
use crate::domain::member::{Member, NewMember};
use crate::domain::member_team::MemberTeam;
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId, Username};
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    MemberCounter, MemberReader, MemberTeamReader, MemberWriter, TeamReader, TeamWriter,
};

mock! {
    pub Repository {}

    impl MemberTeamReader for Repository {
        fn fetch_member_teams<'a>(
            &self,
            condition: Option<&'a Condition>,
            page: &PageRequest,
        ) -> RepositoryResult<Vec<MemberTeam>>;
        fn fetch_member_teams_with_total<'a>(
            &self,
            condition: Option<&'a Condition>,
            page: &PageRequest,
        ) -> RepositoryResult<(usize, Vec<MemberTeam>)>;
        fn list_member_teams<'a>(
            &self,
            condition: Option<&'a Condition>,
        ) -> RepositoryResult<Vec<MemberTeam>>;
    }

    impl MemberCounter for Repository {
        fn count_members<'a>(
            &self,
            condition: Option<&'a Condition>,
            include_join: bool,
        ) -> RepositoryResult<usize>;
    }

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self) -> RepositoryResult<Vec<Member>>;
        fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
        fn change_member_team(
            &self,
            member_id: MemberId,
            team_id: Option<TeamId>,
        ) -> RepositoryResult<Member>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
