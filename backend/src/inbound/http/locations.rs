//! Headquarters and branch routes.
//!
//! Headquarters answer a missing entity with a plain-text 404 and expose two
//! derived views: `/{id}/metrics` and `/{id}/label`.

use std::sync::Arc;

use actix_web::{HttpResponse, Scope, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CrudRepository;
use crate::domain::{
    Branch, BranchDraft, Headquarters, HeadquartersDraft, HeadquartersMetrics, location_label,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::resources::{
    NotFoundResponse, ResourceRoutes, not_found, resource_scope,
};
use crate::inbound::http::state::HttpState;

/// `/api/headquarters`.
pub struct HeadquartersRoutes;

impl ResourceRoutes for HeadquartersRoutes {
    type Entity = Headquarters;
    type Draft = HeadquartersDraft;

    const LABEL: &'static str = "Headquarters";
    const NOT_FOUND: NotFoundResponse = NotFoundResponse::PlainText("Headquarters not found");

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Headquarters, Draft = HeadquartersDraft>> {
        &state.headquarters
    }
}

/// `/api/branches`.
pub struct BranchRoutes;

impl ResourceRoutes for BranchRoutes {
    type Entity = Branch;
    type Draft = BranchDraft;

    const LABEL: &'static str = "Branch";

    fn repository(
        state: &HttpState,
    ) -> &Arc<dyn CrudRepository<Entity = Branch, Draft = BranchDraft>> {
        &state.branches
    }
}

/// Body of `GET /api/headquarters/{id}/label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationLabel {
    #[schema(example = "Location: OctoCAT HQ, City: Lisbon, Country: Portugal")]
    pub label: String,
}

/// Headquarters scope including the derived views.
pub fn headquarters_scope() -> Scope {
    resource_scope::<HeadquartersRoutes>("/headquarters")
        .route("/{id}/metrics", web::get().to(headquarters_metrics))
        .route("/{id}/label", web::get().to(headquarters_label))
}

/// Derived figures for one headquarters.
#[utoipa::path(
    get,
    path = "/api/headquarters/{id}/metrics",
    tags = ["headquarters"],
    params(("id" = i64, Path, description = "Headquarters identifier")),
    responses(
        (status = 200, description = "Derived metrics", body = HeadquartersMetrics),
        (status = 400, description = "Identifier is not an integer", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "Headquarters not found", body = String, content_type = "text/plain")
    )
)]
pub async fn headquarters_metrics(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    match state.headquarters.find_by_id(id).await? {
        Some(headquarters) => Ok(HttpResponse::Ok().json(HeadquartersMetrics::from(&headquarters))),
        None => not_found::<HeadquartersRoutes>(id),
    }
}

/// Human-readable location of one headquarters.
#[utoipa::path(
    get,
    path = "/api/headquarters/{id}/label",
    tags = ["headquarters"],
    params(("id" = i64, Path, description = "Headquarters identifier")),
    responses(
        (status = 200, description = "Location label", body = LocationLabel),
        (status = 400, description = "Identifier is not an integer", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "Headquarters not found", body = String, content_type = "text/plain")
    )
)]
pub async fn headquarters_label(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let Some(headquarters) = state.headquarters.find_by_id(id).await? else {
        return not_found::<HeadquartersRoutes>(id);
    };
    let label = location_label(
        &headquarters.name,
        headquarters.city.as_deref(),
        headquarters.country.as_deref(),
    );
    Ok(HttpResponse::Ok().json(LocationLabel { label }))
}
