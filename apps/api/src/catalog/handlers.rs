use axum::{extract::Query, Json};
use serde::Serialize;

use crate::analysis::handlers::TrackQuery;
use crate::catalog::{RoleEntry, RoleGroup, ROLES};
use crate::errors::AppError;
use crate::skills::bank::SKILL_BANK;

#[derive(Serialize)]
pub struct CatalogResponse {
    pub roles: &'static [RoleGroup],
    pub skills: &'static [&'static str],
}

/// GET /api/v1/catalog
/// Role → category → track tree for selection menus, plus the skill labels.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        roles: ROLES,
        skills: SKILL_BANK,
    })
}

/// GET /api/v1/blueprint?role=&category=&track=
pub async fn handle_blueprint(Query(query): Query<TrackQuery>) -> Result<Json<RoleEntry>, AppError> {
    Ok(Json(query.resolve()?))
}
