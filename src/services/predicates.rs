//! Builds search [`Condition`]s from [`MemberSearchCondition`]s.
//!
//! Each builder yields `None` when its criterion is absent, so the results
//! can be folded with [`Condition::conjunction`] without any branching.

use crate::domain::condition::Condition;
use crate::domain::criteria::MemberSearchCondition;
use crate::domain::types::Age;

pub fn username_eq(criteria: &MemberSearchCondition) -> Option<Condition> {
    criteria.username.clone().map(Condition::username_eq)
}

pub fn team_name_eq(criteria: &MemberSearchCondition) -> Option<Condition> {
    criteria.team_name.clone().map(Condition::team_name_eq)
}

pub fn age_goe(criteria: &MemberSearchCondition) -> Option<Condition> {
    criteria.age_goe.map(Condition::age_goe)
}

pub fn age_loe(criteria: &MemberSearchCondition) -> Option<Condition> {
    criteria.age_loe.map(Condition::age_loe)
}

/// Inclusive age range.
///
/// Both bounds are required: a missing bound must be handled by the caller
/// instead of silently turning into "no restriction".
pub fn age_between(min: Age, max: Age) -> Condition {
    Condition::age_goe(min).and(Condition::age_loe(max))
}

/// One entry per criterion, `None` where the criterion is absent.
pub fn conditions(criteria: &MemberSearchCondition) -> [Option<Condition>; 4] {
    [
        username_eq(criteria),
        team_name_eq(criteria),
        age_goe(criteria),
        age_loe(criteria),
    ]
}

/// Conjunction of every present criterion; `None` means "match everything".
pub fn compose(criteria: &MemberSearchCondition) -> Option<Condition> {
    Condition::conjunction(conditions(criteria))
}
