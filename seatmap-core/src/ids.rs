use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                $name(id)
            }

            #[inline]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                $name(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(
    /// Identity of a physical seat on an airplane.
    SeatId
);
define_id!(
    /// Cabin class (economy, first, ...) shared by seats and boarding passes.
    SeatClassId
);
define_id!(
    /// Groups passengers bought together.
    PurchaseId
);
define_id!(
    /// Airplane model; selects the cabin layout.
    AirplaneTypeId
);
define_id!(FlightId);
