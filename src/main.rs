mod api_types;
mod http_utils;
mod storage;
mod types;

use api_types::{
    AppState, AuthenticateRequest, BalanceResponse, DepositRequest, TransferRequest,
    TransferResponse,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use http_utils::{to_http_error, ErrorBody};
use serde_json::json;
use storage::Ledger;
use tower_http::trace;
use tracing::Level;
use types::account::seed_accounts;

fn make_router() -> Router<()> {
    let accounts = seed_accounts();
    tracing::info!("ledger seeded with {} accounts", accounts.len());
    let state = AppState::new(storage::SharedInmemoryLedger::new(accounts));
    Router::new()
        .route("/", get(health_check))
        .route("/authenticate", post(authenticate_user))
        .route("/deposit", post(deposit))
        .route("/bank-transfer", post(bank_transfer))
        .with_state(state)
        .layer(
            trace::TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "message": "bank api running" }))
}

async fn authenticate_user(
    State(state): State<AppState>,
    Json(req): Json<AuthenticateRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, Json<ErrorBody>)> {
    let account = state
        .ledger
        .authenticate(&req.name, req.pin_number)
        .await
        .map_err(to_http_error)?;
    Ok(Json(account.into()))
}

async fn deposit(
    State(mut state): State<AppState>,
    Json(req): Json<DepositRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, Json<ErrorBody>)> {
    let account = state
        .ledger
        .deposit(&req.name, req.amount)
        .await
        .map_err(to_http_error)?;
    Ok(Json(account.into()))
}

#[axum_macros::debug_handler]
async fn bank_transfer(
    State(mut state): State<AppState>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, (StatusCode, Json<ErrorBody>)> {
    let outcome = state
        .ledger
        .transfer(&req.sender_name, req.send_pin, &req.recipient_name, req.amount)
        .await
        .map_err(to_http_error)?;
    Ok(Json(outcome.into()))
}

#[tokio::main]
async fn main() {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact(); // use the `Compact` formatting style.
    tracing_subscriber::fmt().event_format(format).init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    let router = make_router();
    axum::serve(listener, router).await.unwrap();
}
