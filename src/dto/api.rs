//! DTOs exposed by the member API endpoints.

use serde::Serialize;

use crate::domain::member_team::MemberTeam;
use crate::pagination::PageResult;

/// Result payload returned by [`crate::services::api::search_members`].
#[derive(Debug, Serialize)]
pub struct MembersResponse {
    /// Total number of members matching the criteria.
    pub total: usize,
    /// 1-based number of the returned page.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    /// Page numbers for a navigation bar; `null` marks a gap.
    pub pages: Vec<Option<usize>>,
    /// Members on the requested page, joined with their team.
    pub members: Vec<MemberTeam>,
}

impl From<PageResult<MemberTeam>> for MembersResponse {
    fn from(result: PageResult<MemberTeam>) -> Self {
        Self {
            total: result.total,
            page: result.page_number(),
            per_page: result.limit,
            total_pages: result.total_pages(),
            has_next: result.has_next(),
            pages: result.pages(),
            members: result.content,
        }
    }
}
