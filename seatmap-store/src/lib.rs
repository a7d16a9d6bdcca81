pub mod app_config;
pub mod database;
pub mod flight_repo;

pub use database::DbClient;
pub use flight_repo::MySqlFlightRepository;
