use serde::Serialize;

use crate::domain::types::{Age, TeamName, TypeConstraintError, Username};

/// Sparse set of optional member search criteria.
///
/// Every field is either absent or a valid value: blank strings are
/// normalized to `None` on construction and negative ages are rejected.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<Username>,
    pub team_name: Option<TeamName>,
    pub age_goe: Option<Age>,
    pub age_loe: Option<Age>,
}

impl MemberSearchCondition {
    /// Builds criteria from raw, possibly blank, inputs.
    pub fn try_new(
        username: Option<&str>,
        team_name: Option<&str>,
        age_goe: Option<i32>,
        age_loe: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            username: Username::parse_optional(username),
            team_name: TeamName::parse_optional(team_name),
            age_goe: age_goe.map(Age::new).transpose()?,
            age_loe: age_loe.map(Age::new).transpose()?,
        })
    }

    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn team_name(mut self, team_name: TeamName) -> Self {
        self.team_name = Some(team_name);
        self
    }

    pub fn age_goe(mut self, age: Age) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: Age) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Number of criteria that restrict the search.
    pub fn present_count(&self) -> usize {
        [
            self.username.is_some(),
            self.team_name.is_some(),
            self.age_goe.is_some(),
            self.age_loe.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_become_absent() {
        let criteria =
            MemberSearchCondition::try_new(Some("  "), Some(""), None, None).expect("valid");

        assert_eq!(criteria, MemberSearchCondition::default());
        assert_eq!(criteria.present_count(), 0);
    }

    #[test]
    fn values_are_trimmed() {
        let criteria = MemberSearchCondition::try_new(Some(" member1 "), Some("teamA"), Some(20), None)
            .expect("valid");

        assert_eq!(criteria.username.as_deref(), Some("member1"));
        assert_eq!(criteria.team_name.as_deref(), Some("teamA"));
        assert_eq!(criteria.age_goe.map(Age::get), Some(20));
        assert_eq!(criteria.present_count(), 3);
    }

    #[test]
    fn negative_age_is_rejected() {
        assert_eq!(
            MemberSearchCondition::try_new(None, None, Some(-1), None),
            Err(TypeConstraintError::NegativeAge)
        );
        assert_eq!(
            MemberSearchCondition::try_new(None, None, None, Some(-5)),
            Err(TypeConstraintError::NegativeAge)
        );
    }
}
