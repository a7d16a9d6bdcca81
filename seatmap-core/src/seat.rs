use serde::{Deserialize, Serialize};

use crate::ids::{SeatClassId, SeatId};

/// A physical seat of an airplane, as loaded from the seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_id: SeatId,
    #[serde(rename = "seatRow")]
    pub row: i64,
    #[serde(rename = "seatColumn")]
    pub column: String,
    #[serde(rename = "seatTypeId")]
    pub class_id: SeatClassId,
}

impl Seat {
    pub fn new(seat_id: SeatId, row: i64, column: impl Into<String>, class_id: SeatClassId) -> Self {
        Self {
            seat_id,
            row,
            column: column.into(),
            class_id,
        }
    }

    pub fn normalized_column(&self) -> String {
        normalize_column(&self.column)
    }
}

/// Trims and uppercases a column letter. Empty input stays empty.
pub fn normalize_column(raw: &str) -> String {
    raw.trim().to_uppercase()
}
