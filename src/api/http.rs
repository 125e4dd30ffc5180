use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast::Sender as BroadcastSender;

use super::error::ApiError;
use super::message::{DataMessage, Message};
use crate::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
pub struct CreateCityParams {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AddTemperatureParams {
    pub date: String,
    pub temperature: f64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/weather/cities", get(list_cities).put(create_city))
        .route(
            "/api/weather/cities/:city/temperatures",
            get(get_temperatures).post(add_temperature),
        )
        .with_state(state)
}

pub async fn run(
    state: Arc<AppState>,
    addr: SocketAddr,
    shutdown: BroadcastSender<()>,
) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    let mut shutdown_sub = shutdown.subscribe();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_sub.recv().await;
        })
        .await?;
    Ok(())
}

/// Parses a strict `YYYY-MM-DD` day. chrono alone accepts one-digit fields,
/// leading whitespace and signed years.
fn parse_date(input: &str) -> Option<NaiveDate> {
    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

async fn list_cities(State(state): State<Arc<AppState>>) -> Json<DataMessage<Vec<String>>> {
    Json(DataMessage::from_option(state.store.city_names()))
}

async fn get_temperatures(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Json<DataMessage<Vec<(NaiveDate, f64)>>> {
    Json(DataMessage::from_option(state.store.temperatures(&city)))
}

async fn create_city(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CreateCityParams>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadQuery(e.body_text()))?;
    let added = state.store.add_city(&params.name);
    if added {
        tracing::info!(city = %params.name, "city added");
    }
    Ok(Json(Message::new(added)))
}

async fn add_temperature(
    State(state): State<Arc<AppState>>,
    Path(city_name): Path<String>,
    params: Result<Query<AddTemperatureParams>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadQuery(e.body_text()))?;
    let date = parse_date(&params.date).ok_or_else(|| ApiError::InvalidDate(params.date.clone()))?;
    if !params.temperature.is_finite() {
        return Err(ApiError::BadQuery(format!(
            "temperature must be a finite number, got {}",
            params.temperature
        )));
    }

    let city = match state.store.city(&city_name) {
        Some(c) if !c.has_temperature(date) => c,
        _ => return Err(ApiError::TemperatureRejected(city_name)),
    };
    // a concurrent insert for the same day may have won since the check
    if !city.add_temperature(date, params.temperature) {
        return Err(ApiError::TemperatureRejected(city_name));
    }
    tracing::info!(city = %city.name(), %date, temperature = params.temperature, "temperature added");
    Ok(Json(Message::new(true)))
}
