//! Request handlers

use axum::{
    extract::{Query, State},
    Form, Json,
};
use mukund_core::{Coordinate, FixResult, ZoneKind};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::loader;

#[derive(Debug, Deserialize)]
pub struct FixQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Form fields posted by the original vessel client
#[derive(Debug, Deserialize)]
pub struct LegacyFixForm {
    pub latt: String,
    pub longi: String,
}

#[derive(Debug, Serialize)]
pub struct LegacyFixResponse {
    pub distance_to_nearest: f64,
    pub safe_water: bool,
    pub status: &'static str,
    pub fix: FixResult,
}

#[derive(Debug, Serialize)]
pub struct ZoneSummary {
    pub name: String,
    pub kind: ZoneKind,
    pub parts: usize,
    pub vertices: usize,
}

#[derive(Debug, Serialize)]
pub struct ZoneListResponse {
    pub border_zone: String,
    pub harbors: usize,
    pub generation: u64,
    pub zones: Vec<ZoneSummary>,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub generation: u64,
    pub zones: usize,
    pub harbors: usize,
}

/// `GET /api/v1/fix?lat=..&lon=..`
pub async fn get_fix(
    State(state): State<AppState>,
    Query(query): Query<FixQuery>,
) -> ApiResult<Json<FixResult>> {
    let point = Coordinate::new(query.lat, query.lon)?;
    let fix = state.evaluator.current().evaluate(point)?;
    Ok(Json(fix))
}

/// `POST /route11` with form fields `latt` and `longi`
pub async fn legacy_fix(
    State(state): State<AppState>,
    Form(form): Form<LegacyFixForm>,
) -> ApiResult<Json<LegacyFixResponse>> {
    let parse = |field: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| ApiError::BadRequest(format!("{} '{}' is not a number", field, raw)))
    };
    let point = Coordinate::new(parse("latt", &form.latt)?, parse("longi", &form.longi)?)?;
    let fix = state.evaluator.current().evaluate(point)?;

    log::info!(
        "{}: {} ({:.2} km from border)",
        point,
        fix.classification.message,
        fix.nearest_border.distance_km
    );

    Ok(Json(LegacyFixResponse {
        distance_to_nearest: fix.nearest_border.distance_km,
        safe_water: fix.classification.safe,
        status: fix.classification.message,
        fix,
    }))
}

/// `GET /api/v1/zones`
pub async fn list_zones(State(state): State<AppState>) -> Json<ZoneListResponse> {
    let evaluator = state.evaluator.current();
    let zones = evaluator
        .index()
        .zones()
        .iter()
        .map(|z| ZoneSummary {
            name: z.name.clone(),
            kind: z.kind,
            parts: z.parts.len(),
            vertices: z.vertex_count(),
        })
        .collect();

    Json(ZoneListResponse {
        border_zone: evaluator.border_zone().to_string(),
        harbors: evaluator.harbors().len(),
        generation: state.evaluator.generation(),
        zones,
    })
}

/// `POST /api/v1/reload`
pub async fn reload(State(state): State<AppState>) -> ApiResult<Json<ReloadResponse>> {
    let manifest = state.manifest.clone().ok_or(ApiError::NoManifest)?;

    let evaluator = tokio::task::spawn_blocking(move || loader::load_evaluator(&manifest))
        .await
        .map_err(|e| ApiError::Reload(e.to_string()))?
        .map_err(|report| {
            let causes: Vec<String> = report.chain().map(|c| c.to_string()).collect();
            ApiError::Reload(causes.join(": "))
        })?;

    let zones = evaluator.index().zones().len();
    let harbors = evaluator.harbors().len();
    let (_, generation) = state.evaluator.replace(evaluator);

    Ok(Json(ReloadResponse {
        generation,
        zones,
        harbors,
    }))
}
