//! Project expense and profitability routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use margin_core::action::{ExpenseDomain, WindowAction, expense_action, open_project_expenses};
use margin_core::profitability::{
    AnalyticLinesContributor, ExpenseContributor, ProfitabilityContributor, ProfitabilityService,
    SectionRegistry,
};
use margin_db::{
    AnalyticRepository, ExpenseRepository, ProjectRepository, repositories::project::ProjectError,
};
use margin_shared::Capability;

/// Creates the project routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organizations/{org_id}/projects/expense-counts",
            get(batch_expense_counts),
        )
        .route(
            "/organizations/{org_id}/projects/{project_id}/expenses/count",
            get(project_expense_count),
        )
        .route(
            "/organizations/{org_id}/projects/{project_id}/expenses/action",
            get(open_expenses),
        )
        .route(
            "/organizations/{org_id}/projects/{project_id}/profitability",
            get(get_profitability),
        )
        .route(
            "/organizations/{org_id}/projects/{project_id}/profitability/action",
            post(profitability_section_action),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the batch expense-count endpoint.
#[derive(Debug, Deserialize)]
pub struct ExpenseCountsQuery {
    /// Comma-separated project ids.
    pub ids: String,
}

/// Query parameters for the profitability report.
#[derive(Debug, Deserialize)]
pub struct ProfitabilityQuery {
    /// Whether to attach section actions to the report items.
    #[serde(default)]
    pub with_actions: bool,
}

/// Request body for resolving a profitability section action.
#[derive(Debug, Deserialize)]
pub struct SectionActionRequest {
    /// Section identifier, e.g. `"expenses"`.
    pub section: String,
    /// Optional pre-encoded record filter.
    pub domain: Option<ExpenseDomain>,
    /// Optional single target record.
    pub res_id: Option<Uuid>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Checks that the token's organization matches the path organization.
fn check_same_org(auth: &AuthUser, org_id: Uuid) -> Result<(), axum::response::Response> {
    if auth.organization_id() == org_id {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "forbidden",
                "message": "You are not a member of this organization"
            })),
        )
            .into_response())
    }
}

/// Checks that the caller's role grants the capability.
fn check_capability(
    auth: &AuthUser,
    capability: Capability,
) -> Result<(), axum::response::Response> {
    if auth.has_capability(capability) {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "forbidden",
                "message": "Your role does not permit this operation"
            })),
        )
            .into_response())
    }
}

/// Standard 500 response with a logged cause.
fn internal_error(e: &dyn std::fmt::Display, context: &str) -> axum::response::Response {
    error!(error = %e, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

/// Standard 404 for a missing project.
fn project_not_found(project_id: Uuid) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": format!("Project {project_id} not found")
        })),
    )
        .into_response()
}

/// Parses a comma-separated id list from a query string value.
fn parse_id_list(raw: &str) -> Result<Vec<Uuid>, axum::response::Response> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "validation_error",
                        "message": format!("Invalid project id: {s}")
                    })),
                )
                    .into_response()
            })
        })
        .collect()
}

/// Analytic accounts linked to the project, as a query filter list.
fn analytic_ids_of(project: &margin_db::entities::projects::Model) -> Vec<Uuid> {
    project.analytic_account_id.into_iter().collect()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/organizations/{org_id}/projects/expense-counts` - Batch expense counts.
async fn batch_expense_counts(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(org_id): Path<Uuid>,
    Query(query): Query<ExpenseCountsQuery>,
) -> impl IntoResponse {
    if let Err(response) = check_same_org(&auth, org_id) {
        return response;
    }
    if let Err(response) = check_capability(&auth, Capability::ApproveExpenses) {
        return response;
    }

    let project_ids = match parse_id_list(&query.ids) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let project_repo = ProjectRepository::new((*state.db).clone());

    match project_repo.expense_counts(org_id, &project_ids).await {
        Ok(counts) => (StatusCode::OK, Json(json!({ "counts": counts }))).into_response(),
        Err(e) => internal_error(&e, "Failed to compute expense counts"),
    }
}

/// GET `/organizations/{org_id}/projects/{project_id}/expenses/count` - Single count.
async fn project_expense_count(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((org_id, project_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    if let Err(response) = check_same_org(&auth, org_id) {
        return response;
    }
    if let Err(response) = check_capability(&auth, Capability::ApproveExpenses) {
        return response;
    }

    let project_repo = ProjectRepository::new((*state.db).clone());

    if let Err(e) = project_repo.find_by_id(org_id, project_id).await {
        return match e {
            ProjectError::ProjectNotFound(_) => project_not_found(project_id),
            ProjectError::Database(_) => internal_error(&e, "Failed to load project"),
        };
    }

    match project_repo.expense_counts(org_id, &[project_id]).await {
        Ok(counts) => {
            let count = counts.get(&project_id).copied().unwrap_or(0);
            (
                StatusCode::OK,
                Json(json!({ "project_id": project_id, "expense_count": count })),
            )
                .into_response()
        }
        Err(e) => internal_error(&e, "Failed to compute expense count"),
    }
}

/// GET `/organizations/{org_id}/projects/{project_id}/expenses/action` - Window action.
async fn open_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((org_id, project_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    if let Err(response) = check_same_org(&auth, org_id) {
        return response;
    }

    let project_repo = ProjectRepository::new((*state.db).clone());

    let project = match project_repo.find_by_id(org_id, project_id).await {
        Ok(project) => project,
        Err(ProjectError::ProjectNotFound(_)) => return project_not_found(project_id),
        Err(e) => return internal_error(&e, "Failed to load project"),
    };

    let Some(analytic_id) = project.analytic_account_id else {
        return (StatusCode::OK, Json(WindowAction::CloseWindow)).into_response();
    };

    let expense_repo = ExpenseRepository::new((*state.db).clone());

    match expense_repo.search_ids(&[analytic_id]).await {
        Ok(expense_ids) => {
            let action = open_project_expenses(Some(analytic_id), expense_ids);
            (StatusCode::OK, Json(action)).into_response()
        }
        Err(e) => internal_error(&e, "Failed to search project expenses"),
    }
}

/// GET `/organizations/{org_id}/projects/{project_id}/profitability` - Full report.
async fn get_profitability(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((org_id, project_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ProfitabilityQuery>,
) -> impl IntoResponse {
    if let Err(response) = check_same_org(&auth, org_id) {
        return response;
    }

    let project_repo = ProjectRepository::new((*state.db).clone());

    let project = match project_repo.find_by_id(org_id, project_id).await {
        Ok(project) => project,
        Err(ProjectError::ProjectNotFound(_)) => return project_not_found(project_id),
        Err(e) => return internal_error(&e, "Failed to load project"),
    };

    let analytic_ids = analytic_ids_of(&project);

    let expense_repo = ExpenseRepository::new((*state.db).clone());
    let aggregate = match expense_repo.aggregate_qualifying(&analytic_ids).await {
        Ok(aggregate) => aggregate,
        Err(e) => return internal_error(&e, "Failed to aggregate expenses"),
    };

    let analytic_repo = AnalyticRepository::new((*state.db).clone());
    let summary = match analytic_repo
        .profitability_summary(org_id, &analytic_ids)
        .await
    {
        Ok(summary) => summary,
        Err(e) => return internal_error(&e, "Failed to summarize analytic lines"),
    };

    // Actions are attached only when requested and the role permits it.
    let include_action = query.with_actions && auth.has_capability(Capability::ApproveExpenses);

    let registry = SectionRegistry::with_defaults();
    let analytic_contributor = AnalyticLinesContributor::new(&registry, summary);
    let expense_contributor = ExpenseContributor::new(&registry, aggregate, include_action);

    let service = ProfitabilityService::new(registry);
    let contributors: [&dyn ProfitabilityContributor; 2] =
        [&analytic_contributor, &expense_contributor];
    let report = service.assemble(&contributors);

    (StatusCode::OK, Json(report)).into_response()
}

/// POST `/organizations/{org_id}/projects/{project_id}/profitability/action` - Section action.
async fn profitability_section_action(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((org_id, project_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<SectionActionRequest>,
) -> impl IntoResponse {
    if let Err(response) = check_same_org(&auth, org_id) {
        return response;
    }
    if let Err(response) = check_capability(&auth, Capability::ApproveExpenses) {
        return response;
    }

    // Only the expenses section is served here; other sections belong to
    // other services.
    if request.section != "expenses" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "unknown_section",
                "message": format!("Section '{}' is not served here", request.section)
            })),
        )
            .into_response();
    }

    let project_repo = ProjectRepository::new((*state.db).clone());

    let project = match project_repo.find_by_id(org_id, project_id).await {
        Ok(project) => project,
        Err(ProjectError::ProjectNotFound(_)) => return project_not_found(project_id),
        Err(e) => return internal_error(&e, "Failed to load project"),
    };

    let res_ids: Vec<Uuid> = request.res_id.into_iter().collect();
    let action = match expense_action(project.analytic_account_id, request.domain, &res_ids) {
        Some(descriptor) => WindowAction::Open(descriptor),
        None => WindowAction::CloseWindow,
    };

    (StatusCode::OK, Json(action)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_list_accepts_comma_separated_uuids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let raw = format!("{a},{b}");

        let parsed = parse_id_list(&raw).unwrap();

        assert_eq!(parsed, vec![a, b]);
    }

    #[test]
    fn parse_id_list_skips_blank_segments() {
        let a = Uuid::new_v4();
        let raw = format!(" {a} , ,");

        let parsed = parse_id_list(&raw).unwrap();

        assert_eq!(parsed, vec![a]);
    }

    #[test]
    fn parse_id_list_rejects_garbage() {
        assert!(parse_id_list("not-a-uuid").is_err());
    }

    #[test]
    fn analytic_ids_of_empty_without_account() {
        let project = margin_db::entities::projects::Model {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            name: "Rollout".to_string(),
            analytic_account_id: None,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };

        assert!(analytic_ids_of(&project).is_empty());
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, header::AUTHORIZATION},
        middleware::from_fn_with_state,
    };
    use http_body_util::BodyExt;
    use margin_shared::{JwtConfig, JwtService};
    use sea_orm::DatabaseConnection;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::middleware::auth::auth_middleware;

    /// State with a disconnected database; the tests below only exercise
    /// paths that reject before any query runs.
    fn create_test_state() -> AppState {
        AppState {
            db: Arc::new(DatabaseConnection::default()),
            jwt_service: Arc::new(JwtService::new(JwtConfig::default())),
        }
    }

    fn create_app(state: &AppState) -> Router {
        Router::new()
            .merge(routes())
            .layer(from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state.clone())
    }

    fn create_auth_token(state: &AppState, org_id: Uuid, role: &str) -> String {
        state
            .jwt_service
            .generate_access_token(Uuid::new_v4(), org_id, role)
            .expect("should generate token")
    }

    #[tokio::test]
    async fn test_profitability_no_auth() {
        let state = create_test_state();
        let app = create_app(&state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/organizations/{}/projects/{}/profitability",
                        Uuid::new_v4(),
                        Uuid::new_v4()
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expense_counts_wrong_org_forbidden() {
        let state = create_test_state();
        let app = create_app(&state);
        let token = create_auth_token(&state, Uuid::new_v4(), "admin");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/organizations/{}/projects/expense-counts?ids={}",
                        Uuid::new_v4(),
                        Uuid::new_v4()
                    ))
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_expense_counts_member_forbidden() {
        let state = create_test_state();
        let app = create_app(&state);
        let org_id = Uuid::new_v4();
        let token = create_auth_token(&state, org_id, "member");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/organizations/{org_id}/projects/expense-counts?ids={}",
                        Uuid::new_v4()
                    ))
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_section_action_unknown_section() {
        let state = create_test_state();
        let app = create_app(&state);
        let org_id = Uuid::new_v4();
        let token = create_auth_token(&state, org_id, "approver");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!(
                        "/organizations/{org_id}/projects/{}/profitability/action",
                        Uuid::new_v4()
                    ))
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"section":"materials"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "unknown_section");
    }

    #[tokio::test]
    async fn test_expense_counts_rejects_malformed_ids() {
        let state = create_test_state();
        let app = create_app(&state);
        let org_id = Uuid::new_v4();
        let token = create_auth_token(&state, org_id, "admin");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/organizations/{org_id}/projects/expense-counts?ids=not-a-uuid"
                    ))
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
