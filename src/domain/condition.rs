//! Composable boolean conditions over member and team attributes.
//!
//! A search is described by a tree of [`Condition`]s. A condition that is
//! "not provided" is represented as `None`; combining with
//! [`Condition::and_optional`] treats `None` as the identity of AND, so callers
//! never need to branch on absence while building a conjunction. Translation
//! into SQL happens in the repository layer.

use std::ops::BitAnd;

use crate::domain::member_team::MemberTeam;
use crate::domain::types::{Age, TeamName, Username};

/// Single comparison against one attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `members.username = ?`
    UsernameEq(Username),
    /// `teams.name = ?`
    TeamNameEq(TeamName),
    /// `members.age >= ?`
    AgeGoe(Age),
    /// `members.age <= ?`
    AgeLoe(Age),
}

impl Comparison {
    /// Whether the comparison reads an attribute of the joined team.
    pub const fn references_team(&self) -> bool {
        matches!(self, Self::TeamNameEq(_))
    }

    /// Evaluates the comparison against a projected row.
    ///
    /// Mirrors SQL semantics: a comparison against a missing team never
    /// matches.
    pub fn matches(&self, row: &MemberTeam) -> bool {
        match self {
            Self::UsernameEq(username) => &row.username == username,
            Self::TeamNameEq(name) => row.team_name.as_ref() == Some(name),
            Self::AgeGoe(age) => row.age >= *age,
            Self::AgeLoe(age) => row.age <= *age,
        }
    }
}

/// Boolean expression built from [`Comparison`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Compare(Comparison),
    And(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn username_eq(username: Username) -> Self {
        Self::Compare(Comparison::UsernameEq(username))
    }

    pub fn team_name_eq(name: TeamName) -> Self {
        Self::Compare(Comparison::TeamNameEq(name))
    }

    pub fn age_goe(age: Age) -> Self {
        Self::Compare(Comparison::AgeGoe(age))
    }

    pub fn age_loe(age: Age) -> Self {
        Self::Compare(Comparison::AgeLoe(age))
    }

    /// Logical AND of two present conditions.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Logical AND where an absent side is the identity element.
    ///
    /// `and_optional(Some(a), None) == Some(a)` and
    /// `and_optional(None, None) == None`.
    pub fn and_optional(left: Option<Condition>, right: Option<Condition>) -> Option<Condition> {
        match (left, right) {
            (Some(left), Some(right)) => Some(left.and(right)),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }

    /// Folds optional conditions into a single conjunction, left to right.
    ///
    /// Returns `None` when every member is absent, meaning "no restriction".
    pub fn conjunction<I>(conditions: I) -> Option<Condition>
    where
        I: IntoIterator<Item = Option<Condition>>,
    {
        conditions.into_iter().fold(None, Self::and_optional)
    }

    /// Leaf comparisons in left-to-right order.
    pub fn comparisons(&self) -> Vec<&Comparison> {
        match self {
            Self::Compare(comparison) => vec![comparison],
            Self::And(left, right) => {
                let mut result = left.comparisons();
                result.extend(right.comparisons());
                result
            }
        }
    }

    /// Whether any leaf reads an attribute of the joined team.
    ///
    /// Counting without the join is only valid when this is `false`.
    pub fn references_team(&self) -> bool {
        match self {
            Self::Compare(comparison) => comparison.references_team(),
            Self::And(left, right) => left.references_team() || right.references_team(),
        }
    }

    /// Evaluates the condition against a projected row.
    pub fn matches(&self, row: &MemberTeam) -> bool {
        match self {
            Self::Compare(comparison) => comparison.matches(row),
            Self::And(left, right) => left.matches(row) && right.matches(row),
        }
    }
}

impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{MemberId, TeamId};

    fn age(value: i32) -> Age {
        Age::new(value).expect("valid age")
    }

    fn row(username: &str, years: i32, team: Option<&str>) -> MemberTeam {
        MemberTeam {
            member_id: MemberId::new(1).expect("valid member id"),
            username: Username::new(username).expect("valid username"),
            age: age(years),
            team_id: team.map(|_| TeamId::new(1).expect("valid team id")),
            team_name: team.map(|name| TeamName::new(name).expect("valid team name")),
        }
    }

    #[test]
    fn absent_is_the_and_identity() {
        let a = Condition::age_goe(age(20));

        assert_eq!(
            Condition::and_optional(Some(a.clone()), None),
            Some(a.clone())
        );
        assert_eq!(
            Condition::and_optional(None, Some(a.clone())),
            Some(a.clone())
        );
        assert_eq!(Condition::and_optional(None, None), None);
    }

    #[test]
    fn conjunction_drops_absent_members() {
        let goe = Condition::age_goe(age(20));
        let loe = Condition::age_loe(age(30));

        let combined = Condition::conjunction([None, Some(goe.clone()), None, Some(loe.clone())])
            .expect("two present conditions");

        assert_eq!(combined, goe & loe);
        assert_eq!(combined.comparisons().len(), 2);
        assert_eq!(Condition::conjunction([None, None]), None);
    }

    #[test]
    fn detects_team_references() {
        let member_only = Condition::age_goe(age(1)).and(Condition::age_loe(age(5)));
        assert!(!member_only.references_team());

        let with_team = member_only.and(Condition::team_name_eq(
            TeamName::new("teamA").expect("valid team name"),
        ));
        assert!(with_team.references_team());
    }

    #[test]
    fn team_comparison_never_matches_missing_team() {
        let condition = Condition::team_name_eq(TeamName::new("teamA").expect("valid team name"));

        assert!(condition.matches(&row("member1", 10, Some("teamA"))));
        assert!(!condition.matches(&row("member1", 10, Some("teamB"))));
        assert!(!condition.matches(&row("member1", 10, None)));
    }

    #[test]
    fn and_requires_both_sides() {
        let condition = Condition::age_goe(age(20)) & Condition::age_loe(age(30));

        assert!(condition.matches(&row("member2", 20, None)));
        assert!(condition.matches(&row("member3", 30, None)));
        assert!(!condition.matches(&row("member1", 10, None)));
        assert!(!condition.matches(&row("member4", 40, None)));
    }
}
