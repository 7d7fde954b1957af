use anyhow::Context;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, info_span, Instrument};

use navfunnel_core::{Path, Point3, ShrinkRange, TriangleList};

use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub corridor: TriangleList,
    pub start: Point3,
    pub end: Point3,
}

#[derive(Debug, Deserialize)]
pub struct JitterRouteRequest {
    #[serde(flatten)]
    pub route: RouteRequest,
    #[serde(default)]
    pub shrink: Option<ShrinkRange>,
    /// Fixes the shrink draw; omitted means a fresh entropy-seeded generator.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub path: Vec<Point3>,
    pub turns: usize,
}

impl From<Path> for RouteResponse {
    fn from(p: Path) -> Self {
        let turns = p.turn_points().len();
        Self { path: p.points, turns }
    }
}

#[derive(Debug, Serialize)]
pub struct Healthz { pub status: &'static str }

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(Healthz { status: "ok" }))
}

pub async fn version() -> impl IntoResponse {
    let svc_version = env!("CARGO_PKG_VERSION");
    let core_version = navfunnel_core::version();
    (StatusCode::OK, Json(json!({"service_version": svc_version, "core_version": core_version})))
}

fn check_endpoints(req: &RouteRequest) -> Result<(), AppError> {
    let finite = |p: &Point3| p.x.is_finite() && p.y.is_finite() && p.z.is_finite();
    if !finite(&req.start) || !finite(&req.end) {
        return Err(AppError::BadRequest("start and end must be finite".into()));
    }
    Ok(())
}

pub async fn route(State(state): State<AppState>, Json(req): Json<RouteRequest>) -> Result<Json<RouteResponse>, AppError> {
    let span = info_span!("route", triangles = req.corridor.triangles.len());
    async move {
        check_endpoints(&req)?;
        let navmesh = state.navmesh;
        let result = tokio::task::spawn_blocking(move || navmesh.route(&req.corridor, req.start, req.end))
            .await
            .context("route task")?;
        respond(result)
    }
    .instrument(span)
    .await
}

pub async fn route_jitter(State(state): State<AppState>, Json(req): Json<JitterRouteRequest>) -> Result<Json<RouteResponse>, AppError> {
    let span = info_span!("route_jitter", triangles = req.route.corridor.triangles.len(), seed = ?req.seed);
    async move {
        check_endpoints(&req.route)?;
        let navmesh = state.navmesh;
        let range = req.shrink.unwrap_or(state.config.shrink);
        let result = tokio::task::spawn_blocking(move || {
            // one generator per request; concurrent requests share nothing
            let mut rng = match req.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let r = req.route;
            navmesh.route_with_rand_offset(&mut rng, &r.corridor, r.start, r.end, range)
        })
        .await
        .context("route task")?;
        respond(result)
    }
    .instrument(span)
    .await
}

fn respond(result: navfunnel_core::Result<Path>) -> Result<Json<RouteResponse>, AppError> {
    match result {
        Ok(path) => {
            let res = RouteResponse::from(path);
            info!(turns = res.turns, points = res.path.len(), "route done");
            Ok(Json(res))
        }
        Err(e) => {
            error!(error=%e, code = e.code(), "route rejected");
            Err(e.into())
        }
    }
}
