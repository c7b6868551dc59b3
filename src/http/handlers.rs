//! Request handlers: the transaction state machine, the chaos toggle,
//! and the status page.

use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::http::response::{TransactionError, TransactionSuccess};
use crate::http::server::AppState;
use crate::http::status_page;
use crate::observability::metrics;

/// Simulated backend transaction.
///
/// Per-request state machine: read the switch, then either respond
/// immediately with a success payload, or hang for the configured delay
/// to mimic a stuck downstream dependency and respond 500. The sleep is
/// scoped to this request's task; concurrent requests each wait on their
/// own timer and never serialize behind each other.
pub async fn transaction(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    if state.switch.is_broken() {
        tokio::time::sleep(Duration::from_millis(state.chaos.failure_delay_ms)).await;

        tracing::error!(
            error_code = crate::http::response::DB_TIMEOUT,
            "CRITICAL: database connection failed"
        );
        metrics::record_transaction(500, start);

        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TransactionError::db_timeout()),
        )
            .into_response();
    }

    metrics::record_transaction(200, start);
    (StatusCode::OK, Json(TransactionSuccess::now())).into_response()
}

/// Flip the fault-injection switch and bounce the browser back to the
/// status page. The new state is discovered by the page's next poll, so
/// the redirect carries no body. Cannot fail.
pub async fn toggle_chaos(State(state): State<AppState>) -> Response {
    let broken = state.switch.toggle();
    metrics::record_toggle(broken);

    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static("/"))],
    )
        .into_response()
}

/// Server-rendered status page.
pub async fn status_page(State(state): State<AppState>) -> Html<String> {
    Html(status_page::render(
        &state.version_label,
        state.switch.is_broken(),
    ))
}
