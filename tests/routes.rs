use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use pushkind_members::domain::member::NewMember;
use pushkind_members::domain::team::NewTeam;
use pushkind_members::models::config::SearchConfig;
use pushkind_members::repository::{DieselRepository, MemberWriter, TeamWriter};
use pushkind_members::routes::api::api_v1_members;
use pushkind_members::services::search::CountStrategy;
use serde_json::Value;

mod common;

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    let team_a = repo.create_team(&NewTeam::try_new("teamA").unwrap()).unwrap();
    let team_b = repo.create_team(&NewTeam::try_new("teamB").unwrap()).unwrap();
    for n in 1..=4 {
        let team = if n <= 2 { &team_a } else { &team_b };
        repo.create_member(
            &NewMember::try_new(format!("member{n}"), n * 10, Some(team.id.get())).unwrap(),
        )
        .unwrap();
    }
    repo
}

fn search_config() -> SearchConfig {
    SearchConfig {
        count_strategy: CountStrategy::ElideWhenPossible,
        default_per_page: 2,
        max_per_page: 10,
    }
}

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new(search_config()))
                .service(web::scope("/api").service(api_v1_members)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_members_first_page() {
    let test_db = common::TestDb::new("test_routes_members_first_page.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get().uri("/api/v1/members").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 4);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["pages"], serde_json::json!([1, 2]));
    assert_eq!(body["members"].as_array().unwrap().len(), 2);
    assert_eq!(body["members"][0]["username"], "member1");
    assert_eq!(body["members"][0]["team_name"], "teamA");
}

#[actix_web::test]
async fn test_members_filtered_and_sorted() {
    let test_db = common::TestDb::new("test_routes_members_filtered.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/v1/members?team_name=teamB&age_goe=0&sort=username,desc&sort=age")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 2);
    let names: Vec<&str> = body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["member4", "member3"]);
}

#[actix_web::test]
async fn test_members_rejects_negative_age() {
    let test_db = common::TestDb::new("test_routes_negative_age.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/v1/members?age_loe=-3")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_members_rejects_unknown_sort_key() {
    let test_db = common::TestDb::new("test_routes_unknown_sort.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/v1/members?sort=email")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_members_rejects_zero_page_size() {
    let test_db = common::TestDb::new("test_routes_zero_page_size.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/v1/members?per_page=0")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_members_rejects_out_of_range_page() {
    let test_db = common::TestDb::new("test_routes_out_of_range_page.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = test::TestRequest::get()
        .uri("/api/v1/members?page=18446744073709551615")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
