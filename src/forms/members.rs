use serde::Deserialize;
use validator::Validate;

use crate::domain::criteria::MemberSearchCondition;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::pagination::{SortDirection, SortKey, SortOrder};

/// Query string of `GET /api/v1/members`.
///
/// `sort` may be repeated; each value is `<key>` or `<key>,<asc|desc>`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MembersQueryForm {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub per_page: Option<usize>,
    #[serde(default)]
    #[validate(length(max = 4))]
    pub sort: Vec<String>,
}

impl MembersQueryForm {
    /// Parses a raw query string, accepting repeated `sort` keys.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|e| FormError::InvalidQuery(e.to_string()))
    }

    /// Search criteria; blank strings are dropped, negative ages rejected.
    pub fn criteria(&self) -> Result<MemberSearchCondition, TypeConstraintError> {
        MemberSearchCondition::try_new(
            self.username.as_deref(),
            self.team_name.as_deref(),
            self.age_goe,
            self.age_loe,
        )
    }

    pub fn sort_orders(&self) -> Result<Vec<SortOrder>, FormError> {
        self.sort.iter().map(String::as_str).map(parse_sort).collect()
    }
}

fn parse_sort(value: &str) -> Result<SortOrder, FormError> {
    let (key, direction) = match value.split_once(',') {
        Some((key, direction)) => (key.trim(), Some(direction.trim())),
        None => (value.trim(), None),
    };

    let key = match key {
        "id" | "member_id" => SortKey::MemberId,
        "username" => SortKey::Username,
        "age" => SortKey::Age,
        "team_name" => SortKey::TeamName,
        other => return Err(FormError::InvalidSortKey(other.to_string())),
    };

    let direction = match direction {
        None | Some("asc") => SortDirection::Asc,
        Some("desc") => SortDirection::Desc,
        Some(other) => return Err(FormError::InvalidSortDirection(other.to_string())),
    };

    Ok(SortOrder { key, direction })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_sort_keys() {
        let form = MembersQueryForm::from_query("sort=team_name&sort=age,desc").unwrap();

        assert_eq!(
            form.sort_orders().unwrap(),
            vec![SortOrder::asc(SortKey::TeamName), SortOrder::desc(SortKey::Age)]
        );
    }

    #[test]
    fn rejects_unknown_sort_key() {
        let form = MembersQueryForm::from_query("sort=email").unwrap();

        assert!(matches!(
            form.sort_orders(),
            Err(FormError::InvalidSortKey(key)) if key == "email"
        ));
    }

    #[test]
    fn rejects_unknown_sort_direction() {
        let form = MembersQueryForm::from_query("sort=age,sideways").unwrap();

        assert!(matches!(
            form.sort_orders(),
            Err(FormError::InvalidSortDirection(_))
        ));
    }

    #[test]
    fn non_numeric_age_is_a_query_error() {
        assert!(matches!(
            MembersQueryForm::from_query("age_goe=ten"),
            Err(FormError::InvalidQuery(_))
        ));
    }

    #[test]
    fn blank_strings_become_absent_criteria() {
        let form = MembersQueryForm::from_query("username=&team_name=%20&age_loe=40").unwrap();
        let criteria = form.criteria().unwrap();

        assert_eq!(criteria.username, None);
        assert_eq!(criteria.team_name, None);
        assert_eq!(criteria.age_loe.map(|age| age.get()), Some(40));
    }

    #[test]
    fn negative_age_is_rejected() {
        let form = MembersQueryForm::from_query("age_goe=-1").unwrap();

        assert_eq!(form.criteria(), Err(TypeConstraintError::NegativeAge));
    }

    #[test]
    fn zero_per_page_fails_validation() {
        let form = MembersQueryForm::from_query("per_page=0").unwrap();

        assert!(form.validate().is_err());
    }
}
