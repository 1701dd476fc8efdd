//! Diesel translation of [`Condition`]s and the member search queries.
//!
//! The joined queries run against `members LEFT JOIN teams`. Team columns are
//! nullable on that source, so every joined predicate is typed as
//! `Nullable<Bool>`; a comparison against a missing team evaluates to NULL and
//! filters the row out, exactly like the in-memory [`Condition::matches`].

use diesel::dsl::{count, sql};
use diesel::expression_methods::AggregateExpressionMethods;
use diesel::helper_types::{IntoBoxed, LeftJoin, LeftJoinQuerySource};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Nullable};
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        condition::{Comparison, Condition},
        member_team::MemberTeam,
    },
    models::member_team::MemberTeam as DbMemberTeam,
    pagination::{PageRequest, SortDirection, SortKey},
    repository::{
        DieselRepository, MemberCounter, MemberTeamReader,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{members, teams},
};

type JoinedSource = LeftJoinQuerySource<members::table, teams::table>;
type JoinedPredicate = Box<dyn BoxableExpression<JoinedSource, Sqlite, SqlType = Nullable<Bool>>>;
type MemberPredicate = Box<dyn BoxableExpression<members::table, Sqlite, SqlType = Bool>>;
type BoxedJoinedQuery<'a> = IntoBoxed<'a, LeftJoin<members::table, teams::table>, Sqlite>;
type BoxedMemberQuery<'a> = IntoBoxed<'a, members::table, Sqlite>;

/// Projection matching [`DbMemberTeam`].
macro_rules! member_team_columns {
    () => {
        (
            members::id,
            members::username,
            members::age,
            teams::id.nullable(),
            teams::name.nullable(),
        )
    };
}

fn joined_predicate(condition: &Condition) -> JoinedPredicate {
    match condition {
        Condition::Compare(comparison) => match comparison {
            Comparison::UsernameEq(username) => {
                Box::new(members::username.eq(username.as_str().to_owned()).nullable())
            }
            Comparison::TeamNameEq(name) => {
                Box::new(teams::name.nullable().eq(name.as_str().to_owned()))
            }
            Comparison::AgeGoe(age) => Box::new(members::age.ge(age.get()).nullable()),
            Comparison::AgeLoe(age) => Box::new(members::age.le(age.get()).nullable()),
        },
        Condition::And(left, right) => {
            Box::new(joined_predicate(left).and(joined_predicate(right)))
        }
    }
}

/// Predicate over `members` alone; `None` if any leaf needs the team join.
fn member_predicate(condition: &Condition) -> Option<MemberPredicate> {
    match condition {
        Condition::Compare(comparison) => match comparison {
            Comparison::UsernameEq(username) => Some(Box::new(
                members::username.eq(username.as_str().to_owned()),
            )),
            Comparison::TeamNameEq(_) => None,
            Comparison::AgeGoe(age) => Some(Box::new(members::age.ge(age.get()))),
            Comparison::AgeLoe(age) => Some(Box::new(members::age.le(age.get()))),
        },
        Condition::And(left, right) => Some(Box::new(
            member_predicate(left)?.and(member_predicate(right)?),
        )),
    }
}

fn joined_query<'a>(condition: Option<&Condition>) -> BoxedJoinedQuery<'a> {
    let mut query = members::table
        .left_join(teams::table)
        .into_boxed::<Sqlite>();

    if let Some(condition) = condition {
        query = query.filter(joined_predicate(condition));
    }
    query
}

/// Query over `members` alone; `None` if the condition needs the team join.
fn member_query<'a>(condition: Option<&Condition>) -> Option<BoxedMemberQuery<'a>> {
    let mut query = members::table.into_boxed::<Sqlite>();

    if let Some(condition) = condition {
        query = query.filter(member_predicate(condition)?);
    }
    Some(query)
}

/// Applies the requested ordering, a member id tiebreaker, and the window.
fn paged<'a>(
    mut query: BoxedJoinedQuery<'a>,
    page: &PageRequest,
) -> RepositoryResult<BoxedJoinedQuery<'a>> {
    let offset = i64::try_from(page.offset()).map_err(|_| {
        RepositoryError::ValidationError(format!("offset {} out of range", page.offset()))
    })?;
    let limit = i64::try_from(page.limit()).map_err(|_| {
        RepositoryError::ValidationError(format!("limit {} out of range", page.limit()))
    })?;

    for order in page.sort() {
        query = match (order.key, order.direction) {
            (SortKey::MemberId, SortDirection::Asc) => query.then_order_by(members::id.asc()),
            (SortKey::MemberId, SortDirection::Desc) => query.then_order_by(members::id.desc()),
            (SortKey::Username, SortDirection::Asc) => {
                query.then_order_by(members::username.asc())
            }
            (SortKey::Username, SortDirection::Desc) => {
                query.then_order_by(members::username.desc())
            }
            (SortKey::Age, SortDirection::Asc) => query.then_order_by(members::age.asc()),
            (SortKey::Age, SortDirection::Desc) => query.then_order_by(members::age.desc()),
            (SortKey::TeamName, SortDirection::Asc) => query.then_order_by(teams::name.asc()),
            (SortKey::TeamName, SortDirection::Desc) => query.then_order_by(teams::name.desc()),
        };
    }

    Ok(query
        .then_order_by(members::id.asc())
        .offset(offset)
        .limit(limit))
}

fn into_domain(rows: Vec<DbMemberTeam>) -> RepositoryResult<Vec<MemberTeam>> {
    rows.into_iter()
        .map(|row| MemberTeam::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl MemberTeamReader for DieselRepository {
    fn fetch_member_teams(
        &self,
        condition: Option<&Condition>,
        page: &PageRequest,
    ) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;

        let query = paged(joined_query(condition), page)?.select(member_team_columns!());
        log::debug!(
            "member search: {}",
            diesel::debug_query::<Sqlite, _>(&query)
        );

        let rows = query.load::<DbMemberTeam>(&mut conn)?;
        into_domain(rows)
    }

    fn fetch_member_teams_with_total(
        &self,
        condition: Option<&Condition>,
        page: &PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeam>)> {
        let mut conn = self.conn()?;

        // The window is evaluated before LIMIT/OFFSET, so every row carries
        // the size of the whole filtered set.
        let rows = paged(joined_query(condition), page)?
            .select((member_team_columns!(), sql::<BigInt>("COUNT(*) OVER ()")))
            .load::<(DbMemberTeam, i64)>(&mut conn)?;

        let total = match rows.first() {
            Some((_, total)) => *total as usize,
            None if page.offset() == 0 => 0,
            // Past the last page there is no row to carry the window value.
            None => joined_query(condition)
                .select(count(members::id).aggregate_distinct())
                .get_result::<i64>(&mut conn)? as usize,
        };

        let items = into_domain(rows.into_iter().map(|(row, _)| row).collect())?;
        Ok((total, items))
    }

    fn list_member_teams(&self, condition: Option<&Condition>) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;

        let rows = joined_query(condition)
            .order(members::id.asc())
            .select(member_team_columns!())
            .load::<DbMemberTeam>(&mut conn)?;

        into_domain(rows)
    }
}

impl MemberCounter for DieselRepository {
    fn count_members(
        &self,
        condition: Option<&Condition>,
        include_join: bool,
    ) -> RepositoryResult<usize> {
        let member_only = if include_join {
            None
        } else {
            let query = member_query(condition);
            if query.is_none() {
                log::warn!("Count without join requested for a team predicate; joining");
            }
            query
        };

        let mut conn = self.conn()?;

        let total = match member_only {
            Some(query) => query.count().get_result::<i64>(&mut conn)?,
            None => joined_query(condition)
                .select(count(members::id).aggregate_distinct())
                .get_result::<i64>(&mut conn)?,
        };

        Ok(total as usize)
    }
}
