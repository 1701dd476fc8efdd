//! Paginated member search.
//!
//! [`PaginatedSearch`] composes the criteria into a single condition, loads
//! one page of members left-joined with their team and determines the total
//! number of matches according to its [`CountStrategy`].

use serde::Deserialize;

use crate::domain::condition::Condition;
use crate::domain::criteria::MemberSearchCondition;
use crate::domain::member_team::MemberTeam;
use crate::pagination::{PageRequest, PageResult};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberCounter, MemberTeamReader};
use crate::services::{ServiceResult, predicates};

/// How the total number of matches is obtained.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CountStrategy {
    /// Content and total come from a single combined query.
    Naive,
    /// A dedicated count query always runs after the content query.
    ExplicitCount,
    /// The count query is skipped when the total follows from the page itself.
    #[default]
    ElideWhenPossible,
}

/// Total implied by the shape of a fetched page, if any.
///
/// Known when a short page is returned on the first page (`total == len`) or
/// a non-empty short page is returned further on (`total == offset + len`).
/// A full page, or an empty page past the first one, says nothing about the
/// rows beyond it.
pub fn elided_total(page: &PageRequest, content_len: usize) -> Option<usize> {
    if content_len >= page.limit() {
        return None;
    }
    if page.offset() == 0 {
        return Some(content_len);
    }
    if content_len > 0 {
        return Some(page.offset() + content_len);
    }
    None
}

/// Stateless search executor; cheap to copy and share between workers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaginatedSearch {
    strategy: CountStrategy,
}

impl PaginatedSearch {
    pub const fn new(strategy: CountStrategy) -> Self {
        Self { strategy }
    }

    /// Loads one page of matching members and the total number of matches.
    ///
    /// Fails as a whole if either the content or the count query fails.
    pub fn search<R>(
        &self,
        repo: &R,
        criteria: &MemberSearchCondition,
        page: &PageRequest,
    ) -> ServiceResult<PageResult<MemberTeam>>
    where
        R: MemberTeamReader + MemberCounter + ?Sized,
    {
        let condition = predicates::compose(criteria);
        let condition = condition.as_ref();
        log::debug!(
            "Searching members with {} criteria, {:?} count strategy",
            criteria.present_count(),
            self.strategy
        );

        let (total, content) = match self.strategy {
            CountStrategy::Naive => repo.fetch_member_teams_with_total(condition, page)?,
            CountStrategy::ExplicitCount => {
                let content = repo.fetch_member_teams(condition, page)?;
                let total = count(repo, condition)?;
                (total, content)
            }
            CountStrategy::ElideWhenPossible => {
                let content = repo.fetch_member_teams(condition, page)?;
                let total = match elided_total(page, content.len()) {
                    Some(total) => {
                        log::debug!("Count query elided, total {total}");
                        total
                    }
                    None => count(repo, condition)?,
                };
                (total, content)
            }
        };

        Ok(PageResult::new(content, total, page))
    }

    /// Loads every matching member without pagination.
    pub fn search_all<R>(
        &self,
        repo: &R,
        criteria: &MemberSearchCondition,
    ) -> ServiceResult<Vec<MemberTeam>>
    where
        R: MemberTeamReader + ?Sized,
    {
        let condition = predicates::compose(criteria);
        Ok(repo.list_member_teams(condition.as_ref())?)
    }
}

/// Runs the count query, skipping the team join when no predicate needs it.
///
/// The join is a many-to-one left outer join: it neither removes nor
/// duplicates members, so only team predicates require it.
fn count<R>(repo: &R, condition: Option<&Condition>) -> RepositoryResult<usize>
where
    R: MemberCounter + ?Sized,
{
    let include_join = condition.is_some_and(Condition::references_team);
    log::debug!("Running count query, include_join: {include_join}");
    repo.count_members(condition, include_join)
}
