//! In-memory repository evaluating [`Condition`]s directly.
//!
//! Backs service tests that need real filtering semantics without a database.
//! Every read is recorded so tests can assert which queries were issued.

use std::cell::{Cell, RefCell};

use crate::domain::condition::Condition;
use crate::domain::member_team::MemberTeam;
use crate::domain::team::Team;
use crate::domain::types::{Age, MemberId, TeamId, TeamName, Username};
use crate::pagination::{PageRequest, SortDirection, SortKey};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{MemberCounter, MemberTeamReader};

#[derive(Default)]
pub struct InMemoryRepository {
    rows: Vec<MemberTeam>,
    pub fetches: Cell<usize>,
    pub combined_fetches: Cell<usize>,
    /// `include_join` flag of every count issued, in order.
    pub counts: RefCell<Vec<bool>>,
    pub fail_counts: bool,
}

impl InMemoryRepository {
    pub fn new(rows: Vec<MemberTeam>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Four members aged 10, 20, 30 and 40; the first two in `teamA`, the
    /// others in `teamB`.
    pub fn sample() -> Self {
        let team_a = Team {
            id: TeamId::new(1).expect("valid team id"),
            name: TeamName::new("teamA").expect("valid team name"),
        };
        let team_b = Team {
            id: TeamId::new(2).expect("valid team id"),
            name: TeamName::new("teamB").expect("valid team name"),
        };
        let rows = (1..=4)
            .map(|n| {
                let team = if n <= 2 { &team_a } else { &team_b };
                MemberTeam {
                    member_id: MemberId::new(n).expect("valid member id"),
                    username: Username::new(format!("member{n}")).expect("valid username"),
                    age: Age::new(n * 10).expect("valid age"),
                    team_id: Some(team.id),
                    team_name: Some(team.name.clone()),
                }
            })
            .collect();
        Self::new(rows)
    }

    /// Makes every count query fail with a connection error.
    pub fn failing_counts(mut self) -> Self {
        self.fail_counts = true;
        self
    }

    fn matching(&self, condition: Option<&Condition>) -> Vec<MemberTeam> {
        self.rows
            .iter()
            .filter(|row| condition.is_none_or(|condition| condition.matches(row)))
            .cloned()
            .collect()
    }

    fn window(&self, condition: Option<&Condition>, page: &PageRequest) -> Vec<MemberTeam> {
        let mut rows = self.matching(condition);
        rows.sort_by(|a, b| {
            page.sort()
                .iter()
                .map(|order| {
                    let ordering = match order.key {
                        SortKey::MemberId => a.member_id.cmp(&b.member_id),
                        SortKey::Username => a.username.cmp(&b.username),
                        SortKey::Age => a.age.cmp(&b.age),
                        SortKey::TeamName => a.team_name.cmp(&b.team_name),
                    };
                    match order.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                })
                .fold(std::cmp::Ordering::Equal, std::cmp::Ordering::then)
                .then(a.member_id.cmp(&b.member_id))
        });
        rows.into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect()
    }
}

impl MemberTeamReader for InMemoryRepository {
    fn fetch_member_teams(
        &self,
        condition: Option<&Condition>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<MemberTeam>> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.window(condition, page))
    }

    fn fetch_member_teams_with_total(
        &self,
        condition: Option<&Condition>,
        page: &PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeam>)> {
        self.combined_fetches.set(self.combined_fetches.get() + 1);
        Ok((
            self.matching(condition).len(),
            self.window(condition, page),
        ))
    }

    fn list_member_teams(&self, condition: Option<&Condition>) -> RepositoryResult<Vec<MemberTeam>> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.matching(condition))
    }
}

impl MemberCounter for InMemoryRepository {
    fn count_members(
        &self,
        condition: Option<&Condition>,
        include_join: bool,
    ) -> RepositoryResult<usize> {
        self.counts.borrow_mut().push(include_join);
        if self.fail_counts {
            return Err(RepositoryError::ConnectionError(
                "count connection lost".to_string(),
            ));
        }
        Ok(self.matching(condition).len())
    }
}
