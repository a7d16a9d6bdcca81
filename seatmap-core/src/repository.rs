use async_trait::async_trait;

use crate::flight::{Flight, PassengerDetails};
use crate::ids::{AirplaneTypeId, FlightId};
use crate::passenger::Passenger;
use crate::seat::Seat;

pub type RepositoryResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Read access to the flight, boarding pass and seat map data a seating
/// request needs. Every call returns a fresh snapshot.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// `Ok(None)` when no flight has this id.
    async fn find_flight(&self, flight_id: FlightId) -> RepositoryResult<Option<Flight>>;

    /// Boarding passes of a flight, ordered by purchase then boarding pass id.
    async fn list_passengers(&self, flight_id: FlightId) -> RepositoryResult<Vec<Passenger<PassengerDetails>>>;

    /// Seat map of an airplane model.
    async fn list_seats(&self, airplane_id: AirplaneTypeId) -> RepositoryResult<Vec<Seat>>;
}
