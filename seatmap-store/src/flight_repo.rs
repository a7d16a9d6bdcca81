use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use std::num::TryFromIntError;

use seatmap_core::{
    AirplaneTypeId, Flight, FlightId, FlightRepository, Passenger, PassengerDetails, PurchaseId,
    RepositoryResult, Seat, SeatClassId, SeatId,
};

#[derive(Debug, sqlx::FromRow)]
struct FlightRow {
    flight_id: i64,
    takeoff_date_time: i64,
    takeoff_airport: String,
    landing_date_time: i64,
    landing_airport: String,
    airplane_id: i64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_id: FlightId::new(row.flight_id),
            takeoff_date_time: row.takeoff_date_time,
            takeoff_airport: row.takeoff_airport,
            landing_date_time: row.landing_date_time,
            landing_airport: row.landing_airport,
            airplane_id: AirplaneTypeId::new(row.airplane_id),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PassengerRow {
    boarding_pass_id: i64,
    purchase_id: i64,
    passenger_id: i64,
    seat_type_id: i64,
    seat_id: Option<i64>,
    dni: Option<String>,
    name: String,
    age: i64,
    country: String,
}

impl TryFrom<PassengerRow> for Passenger<PassengerDetails> {
    type Error = TryFromIntError;

    fn try_from(row: PassengerRow) -> Result<Self, Self::Error> {
        Ok(Passenger {
            passenger_id: row.passenger_id,
            age: i32::try_from(row.age)?,
            purchase_id: PurchaseId::new(row.purchase_id),
            seat_class_id: SeatClassId::new(row.seat_type_id),
            seat_id: row.seat_id.map(SeatId::new),
            details: PassengerDetails {
                dni: normalize_dni(row.dni.as_deref()),
                name: row.name,
                country: row.country,
                boarding_pass_id: row.boarding_pass_id,
            },
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SeatRow {
    seat_id: i64,
    seat_row: i64,
    seat_column: Option<String>,
    seat_type_id: i64,
}

impl From<SeatRow> for Seat {
    fn from(row: SeatRow) -> Self {
        Seat::new(
            SeatId::new(row.seat_id),
            row.seat_row,
            row.seat_column.unwrap_or_default(),
            SeatClassId::new(row.seat_type_id),
        )
    }
}

/// DNI values are stored inconsistently (text or number, sometimes blank).
/// Anything that is not a whole number becomes `None`.
pub fn normalize_dni(raw: Option<&str>) -> Option<i64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

pub struct MySqlFlightRepository {
    pub pool: MySqlPool,
}

impl MySqlFlightRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for MySqlFlightRepository {
    async fn find_flight(&self, flight_id: FlightId) -> RepositoryResult<Option<Flight>> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT
                CAST(flight_id AS SIGNED) AS flight_id,
                CAST(takeoff_date_time AS SIGNED) AS takeoff_date_time,
                takeoff_airport,
                CAST(landing_date_time AS SIGNED) AS landing_date_time,
                landing_airport,
                CAST(airplane_id AS SIGNED) AS airplane_id
            FROM flight
            WHERE flight_id = ?
            "#,
        )
        .bind(flight_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Flight::from))
    }

    async fn list_passengers(&self, flight_id: FlightId) -> RepositoryResult<Vec<Passenger<PassengerDetails>>> {
        let rows = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT
                CAST(bp.boarding_pass_id AS SIGNED) AS boarding_pass_id,
                CAST(bp.purchase_id AS SIGNED) AS purchase_id,
                CAST(bp.passenger_id AS SIGNED) AS passenger_id,
                CAST(bp.seat_type_id AS SIGNED) AS seat_type_id,
                CAST(bp.seat_id AS SIGNED) AS seat_id,
                CAST(p.dni AS CHAR) AS dni,
                p.name,
                CAST(p.age AS SIGNED) AS age,
                p.country
            FROM boarding_pass bp
            JOIN passenger p ON p.passenger_id = bp.passenger_id
            WHERE bp.flight_id = ?
            ORDER BY bp.purchase_id, bp.boarding_pass_id
            "#,
        )
        .bind(flight_id.value())
        .fetch_all(&self.pool)
        .await?;

        let passengers = rows
            .into_iter()
            .map(Passenger::<PassengerDetails>::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(passengers)
    }

    async fn list_seats(&self, airplane_id: AirplaneTypeId) -> RepositoryResult<Vec<Seat>> {
        let rows = sqlx::query_as::<_, SeatRow>(
            r#"
            SELECT
                CAST(seat_id AS SIGNED) AS seat_id,
                CAST(seat_row AS SIGNED) AS seat_row,
                seat_column,
                CAST(seat_type_id AS SIGNED) AS seat_type_id
            FROM seat
            WHERE airplane_id = ?
            "#,
        )
        .bind(airplane_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Seat::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dni() {
        assert_eq!(normalize_dni(None), None);
        assert_eq!(normalize_dni(Some("")), None);
        assert_eq!(normalize_dni(Some("   ")), None);
        assert_eq!(normalize_dni(Some(" 40117723 ")), Some(40117723));
        assert_eq!(normalize_dni(Some("12.345.678-9")), None);
    }

    #[test]
    fn test_passenger_row_mapping() {
        let row = PassengerRow {
            boarding_pass_id: 7,
            purchase_id: 3,
            passenger_id: 21,
            seat_type_id: 2,
            seat_id: None,
            dni: Some("9001".to_string()),
            name: "Tomás".to_string(),
            age: 9,
            country: "Perú".to_string(),
        };

        let passenger = Passenger::<PassengerDetails>::try_from(row).unwrap();
        assert_eq!(passenger.passenger_id, 21);
        assert_eq!(passenger.purchase_id, PurchaseId::new(3));
        assert_eq!(passenger.seat_class_id, SeatClassId::new(2));
        assert!(passenger.is_minor());
        assert_eq!(passenger.details.dni, Some(9001));
        assert_eq!(passenger.details.boarding_pass_id, 7);
    }

    #[test]
    fn test_seat_row_without_column() {
        let seat = Seat::from(SeatRow {
            seat_id: 5,
            seat_row: 12,
            seat_column: None,
            seat_type_id: 1,
        });
        assert_eq!(seat.column, "");
        assert_eq!(seat.row, 12);
    }
}
