use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;
use serde_json::json;

use crate::forms::members::MembersQueryForm;
use crate::models::config::SearchConfig;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api::search_members;

/// `GET /api/v1/members`: one page of members joined with their team.
#[get("/v1/members")]
pub async fn api_v1_members(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    search_config: web::Data<SearchConfig>,
) -> impl Responder {
    // Parsed by hand so that `sort` may be repeated.
    let form = match MembersQueryForm::from_query(req.query_string()) {
        Ok(form) => form,
        Err(e) => return bad_request(&e.to_string()),
    };

    let result = web::block(move || search_members(repo.get_ref(), &form, &search_config)).await;

    match result {
        Ok(Ok(response)) => HttpResponse::Ok().json(response),
        Ok(Err(
            e @ (ServiceError::InvalidCriteria(_)
            | ServiceError::InconsistentPageRequest(_)
            | ServiceError::Form(_)),
        )) => bad_request(&e.to_string()),
        Ok(Err(e)) => {
            error!("Failed to search members: {e}");
            HttpResponse::InternalServerError().finish()
        }
        Err(e) => {
            error!("Member search task failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}
