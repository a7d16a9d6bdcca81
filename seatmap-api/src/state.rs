use std::sync::Arc;

use seatmap_core::{FlightRepository, LayoutRegistry};

#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub layouts: Arc<LayoutRegistry>,
}
