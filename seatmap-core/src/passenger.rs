use serde::{Deserialize, Serialize};

use crate::ids::{PurchaseId, SeatClassId, SeatId};

/// Passengers younger than this must sit next to an adult of their purchase.
pub const ADULT_AGE: i32 = 18;

/// A boarding pass holder as seen by the seat assigner.
///
/// `details` carries whatever else the caller knows about the passenger. The
/// assigner clones it through untouched; on the wire its fields are flattened
/// next to the fixed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger<E> {
    pub passenger_id: i64,
    pub age: i32,
    pub purchase_id: PurchaseId,
    #[serde(rename = "seatTypeId")]
    pub seat_class_id: SeatClassId,
    pub seat_id: Option<SeatId>,
    #[serde(flatten)]
    pub details: E,
}

impl<E> Passenger<E> {
    pub fn is_minor(&self) -> bool {
        self.age < ADULT_AGE
    }

    pub fn is_adult(&self) -> bool {
        !self.is_minor()
    }

    pub fn is_seated(&self) -> bool {
        self.seat_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Extra {
        name: String,
    }

    fn passenger(age: i32) -> Passenger<Extra> {
        Passenger {
            passenger_id: 1,
            age,
            purchase_id: PurchaseId::new(10),
            seat_class_id: SeatClassId::new(1),
            seat_id: None,
            details: Extra { name: "Ana".to_string() },
        }
    }

    #[test]
    fn test_age_boundary() {
        assert!(passenger(17).is_minor());
        assert!(passenger(18).is_adult());
        assert!(!passenger(0).is_adult());
    }

    #[test]
    fn test_details_are_flattened() {
        let json = serde_json::to_value(passenger(30)).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["seatTypeId"], 1);
        assert!(json["seatId"].is_null());

        let back: Passenger<Extra> = serde_json::from_value(json).unwrap();
        assert_eq!(back, passenger(30));
    }
}
