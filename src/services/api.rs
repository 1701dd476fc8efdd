//! Service backing the JSON member search endpoint.

use validator::Validate;

use crate::dto::api::MembersResponse;
use crate::forms::members::MembersQueryForm;
use crate::models::config::SearchConfig;
use crate::pagination::PageRequest;
use crate::repository::{MemberCounter, MemberTeamReader};
use crate::services::ServiceResult;
use crate::services::search::PaginatedSearch;

/// Validates the query form and runs one paginated member search.
///
/// A missing `per_page` falls back to the configured default; larger values
/// are clamped to the configured maximum.
pub fn search_members<R>(
    repo: &R,
    form: &MembersQueryForm,
    config: &SearchConfig,
) -> ServiceResult<MembersResponse>
where
    R: MemberTeamReader + MemberCounter + ?Sized,
{
    form.validate().map_err(crate::forms::FormError::from)?;

    let criteria = form.criteria()?;
    let per_page = form
        .per_page
        .unwrap_or(config.default_per_page)
        .min(config.max_per_page);

    let page = form.sort_orders()?.into_iter().fold(
        PageRequest::from_page(form.page.unwrap_or(1), per_page)?,
        PageRequest::sort_by,
    );

    let result = PaginatedSearch::new(config.count_strategy).search(repo, &criteria, &page)?;
    Ok(result.into())
}
