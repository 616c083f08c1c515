//! Stand-in for the REC Registry public-register API.
//!
//! Serves `GET {base_path}/certificate-actions?date=YYYY-MM-DD`:
//! - `FIXTURE_DATE` returns the recorded four-action fixture verbatim,
//! - dates before it return an empty result,
//! - any other valid date returns one synthesized action on that date,
//! - a missing or malformed date returns a `Failed` envelope with HTTP 400.
//!
//! Every request is appended to a `RequestLog` so tests can check the URL
//! and headers the client actually sent.

pub mod config;
pub mod error;
pub mod logging;
pub mod wire;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};

use crate::config::normalize_base_path;
use crate::wire::{synthesize, Envelope, FIXTURE_BODY, FIXTURE_DATE};

/// One request as seen by the mock registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub user_agent: Option<String>,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

#[derive(Clone)]
struct AppState {
    log: RequestLog,
}

#[derive(Deserialize)]
struct ActionsQuery {
    date: Option<String>,
}

pub fn app(base_path: &str) -> Router {
    router(base_path, RequestLog::default())
}

pub fn router(base_path: &str, log: RequestLog) -> Router {
    let route = format!("{}/certificate-actions", normalize_base_path(base_path));
    Router::new()
        .route(&route, get(certificate_actions))
        .with_state(AppState { log })
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn certificate_actions(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<ActionsQuery>,
) -> Response {
    let recorded = RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    tracing::info!(
        path = %recorded.path,
        date = params.date.as_deref().unwrap_or(""),
        "certificate-actions request"
    );
    state.log.write().await.push(recorded);

    let Some(raw) = params.date else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failed("date parameter is required")),
        )
            .into_response();
    };
    let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failed(format!("invalid date {raw:?}, expected yyyy-MM-dd"))),
        )
            .into_response();
    };

    let day = date.to_string();
    if day == FIXTURE_DATE {
        return ([(header::CONTENT_TYPE, "application/json")], FIXTURE_BODY).into_response();
    }
    if day.as_str() < FIXTURE_DATE {
        return Json(Envelope::success(Vec::new())).into_response();
    }
    Json(Envelope::success(synthesize(date))).into_response()
}
