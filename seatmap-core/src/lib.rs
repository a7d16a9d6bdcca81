pub mod ids;
pub mod seat;
pub mod passenger;
pub mod layout;
pub mod geometry;
pub mod availability;
pub mod assignment;
pub mod flight;
pub mod repository;

pub use ids::{AirplaneTypeId, FlightId, PurchaseId, SeatClassId, SeatId};
pub use seat::Seat;
pub use passenger::Passenger;
pub use layout::{Coordinate, Layout, LayoutError, LayoutRegistry};
pub use availability::AvailabilityTracker;
pub use assignment::{assign_seats, AssignmentSummary, SeatAssigner};
pub use flight::{Flight, PassengerDetails};
pub use repository::{FlightRepository, RepositoryResult};
