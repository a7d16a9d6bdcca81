use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use seatmap_core::{AssignmentSummary, Flight, FlightId, Passenger, PassengerDetails, SeatAssigner};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPassengersResponse {
    #[serde(flatten)]
    pub flight: Flight,
    pub passengers: Vec<Passenger<PassengerDetails>>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/flights/{id}/passengers", get(get_flight_passengers))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /flights/{id}/passengers
/// Flight details plus every boarding pass, with free seats assigned
pub async fn get_flight_passengers(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<FlightPassengersResponse>>, AppError> {
    let flight_id = parse_flight_id(&raw_id).ok_or(AppError::NotFound)?;

    let flight = state
        .flight_repo
        .find_flight(flight_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let passengers = state.flight_repo.list_passengers(flight_id).await?;
    let seats = state.flight_repo.list_seats(flight.airplane_id).await?;

    let assigned = SeatAssigner::new(&state.layouts).assign(flight.airplane_id, &passengers, &seats);

    let summary = AssignmentSummary::between(&passengers, &assigned);
    tracing::info!(
        "Flight {}: {} boarding passes, {} already seated, {} assigned, {} without seat",
        flight_id,
        summary.passengers,
        summary.already_seated,
        summary.assigned,
        summary.unseated
    );

    Ok(Json(ApiResponse {
        code: 200,
        data: FlightPassengersResponse {
            flight,
            passengers: assigned,
        },
    }))
}

/// Accepts positive whole numbers, including forms like `" 7 "` or `"7.0"`.
fn parse_flight_id(raw: &str) -> Option<FlightId> {
    let raw = raw.trim();

    let id = match raw.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            let value: f64 = raw.parse().ok()?;
            if !value.is_finite() || value.fract() != 0.0 || value > i64::MAX as f64 {
                return None;
            }
            value as i64
        }
    };

    (id > 0).then(|| FlightId::new(id))
}
