//! Pagination API endpoints
//!
//! Lets the console front-end render its pagination bar from the server-side
//! window computation:
//! - GET /api/v1/pagination/window - Entries and previous/next controls for a position
//! - GET /api/v1/pagination/change - Validate a page-change request

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{ApiError, ApiQuery, AppState};
use crate::pagination::{NavControl, PageEntry, PageState};

/// Position of a paginated list
#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    /// Current page, defaults to 1
    #[serde(default)]
    pub page: Option<u32>,
    /// Items per page, defaults to the configured page size
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Total item count; negative values count as 0
    #[serde(default)]
    pub total: i64,
}

/// Query for a page-change request
#[derive(Debug, Deserialize)]
pub struct ChangeQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total: i64,
    /// Requested page
    pub target: i64,
}

impl ChangeQuery {
    fn position(&self) -> PositionQuery {
        PositionQuery {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

/// Response for the window endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct WindowResponse {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    /// Whether a pagination bar should be shown at all
    pub visible: bool,
    pub entries: Vec<PageEntry>,
    pub previous: NavControl,
    pub next: NavControl,
}

/// Response for the change endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Build the pagination router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/window", get(get_window))
        .route("/change", get(change_page))
}

/// Resolve a query into a page state using the configured defaults
fn resolve_state(state: &AppState, query: &PositionQuery) -> Result<PageState, ApiError> {
    let page_size = query
        .page_size
        .unwrap_or(state.pagination.default_page_size);

    if page_size > state.pagination.max_page_size {
        return Err(ApiError::validation_error(format!(
            "page_size {} exceeds the maximum of {}",
            page_size, state.pagination.max_page_size
        )));
    }

    Ok(PageState::new(query.page.unwrap_or(1), page_size, query.total)?)
}

/// GET /api/v1/pagination/window - Compute the pagination bar for a list position
async fn get_window(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PositionQuery>,
) -> Result<Json<WindowResponse>, ApiError> {
    let page_state = resolve_state(&state, &query)?;
    let controls = page_state.controls(|_| {});
    let window = controls.window();

    Ok(Json(WindowResponse {
        current_page: page_state.current_page(),
        page_size: page_state.page_size(),
        total_items: page_state.total_items(),
        total_pages: page_state.total_pages(),
        visible: !window.is_empty(),
        entries: window.entries().collect(),
        previous: controls.previous(),
        next: controls.next(),
    }))
}

/// GET /api/v1/pagination/change - Validate a page-change request
///
/// Out-of-range targets are not an error; they come back as `accepted: false`.
async fn change_page(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ChangeQuery>,
) -> Result<Json<ChangeResponse>, ApiError> {
    let page_state = resolve_state(&state, &query.position())?;

    let mut accepted = None;
    page_state
        .controls(|page| accepted = Some(page))
        .request(query.target);

    Ok(Json(ChangeResponse {
        accepted: accepted.is_some(),
        page: accepted,
    }))
}
