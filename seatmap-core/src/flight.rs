use serde::{Deserialize, Serialize};

use crate::ids::{AirplaneTypeId, FlightId};

/// Flight metadata returned alongside the seated passenger list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_id: FlightId,
    pub takeoff_date_time: i64,
    pub takeoff_airport: String,
    pub landing_date_time: i64,
    pub landing_airport: String,
    pub airplane_id: AirplaneTypeId,
}

/// Boarding pass fields the seat assigner passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetails {
    pub dni: Option<i64>,
    pub name: String,
    pub country: String,
    pub boarding_pass_id: i64,
}
