//! Seat assignment for a flight.
//!
//! Passengers are handled one purchase at a time. Within a purchase every
//! cabin class has an anchor seat that later picks stay close to; minors are
//! seated first so they can still get a seat next to an adult of their
//! purchase. A passenger who already holds a seat keeps it.

use std::collections::HashMap;

use tracing::debug;

use crate::availability::AvailabilityTracker;
use crate::ids::{AirplaneTypeId, PurchaseId, SeatClassId, SeatId};
use crate::layout::LayoutRegistry;
use crate::passenger::Passenger;
use crate::seat::Seat;

/// Seats passengers against the built-in layouts.
///
/// Shorthand for [`SeatAssigner::assign`] with [`LayoutRegistry::builtin`].
pub fn assign_seats<E: Clone>(
    airplane: AirplaneTypeId,
    passengers: &[Passenger<E>],
    seats: &[Seat],
) -> Vec<Passenger<E>> {
    let registry = LayoutRegistry::builtin();
    SeatAssigner::new(&registry).assign(airplane, passengers, seats)
}

/// Counts describing one assignment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub passengers: usize,
    pub already_seated: usize,
    pub assigned: usize,
    pub unseated: usize,
}

impl AssignmentSummary {
    pub fn between<E>(before: &[Passenger<E>], after: &[Passenger<E>]) -> Self {
        let already_seated = before.iter().filter(|p| p.is_seated()).count();
        let seated_after = after.iter().filter(|p| p.is_seated()).count();
        Self {
            passengers: after.len(),
            already_seated,
            assigned: seated_after.saturating_sub(already_seated),
            unseated: after.len() - seated_after,
        }
    }
}

pub struct SeatAssigner<'r> {
    registry: &'r LayoutRegistry,
}

impl<'r> SeatAssigner<'r> {
    pub fn new(registry: &'r LayoutRegistry) -> Self {
        Self { registry }
    }

    /// Returns a copy of `passengers` with free seats handed out.
    ///
    /// Never fails: passengers left without a seat of their class keep
    /// `seat_id == None`.
    pub fn assign<E: Clone>(
        &self,
        airplane: AirplaneTypeId,
        passengers: &[Passenger<E>],
        seats: &[Seat],
    ) -> Vec<Passenger<E>> {
        let layout = self.registry.resolve(airplane, seats);
        let mut result = passengers.to_vec();
        let mut tracker = AvailabilityTracker::new(&layout, seats, result.iter().filter_map(|p| p.seat_id));

        for members in group_by_purchase(&result) {
            GroupRun::new(&mut tracker, &mut result, &members).run();
        }

        let summary = AssignmentSummary::between(passengers, &result);
        debug!(
            "Seat assignment for airplane {}: {} passengers, {} seats, {} assigned, {} unseated",
            airplane,
            summary.passengers,
            seats.len(),
            summary.assigned,
            summary.unseated
        );

        result
    }
}

/// Passenger indices per purchase, in first-seen order.
fn group_by_purchase<E>(passengers: &[Passenger<E>]) -> Vec<Vec<usize>> {
    let mut index: HashMap<PurchaseId, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (i, passenger) in passengers.iter().enumerate() {
        let slot = *index.entry(passenger.purchase_id).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(i);
    }
    groups
}

/// State of seating one purchase.
struct GroupRun<'t, 'a, 'p, E> {
    tracker: &'t mut AvailabilityTracker<'a>,
    passengers: &'p mut [Passenger<E>],
    members: &'p [usize],
    anchors: HashMap<SeatClassId, SeatId>,
}

impl<'t, 'a, 'p, E> GroupRun<'t, 'a, 'p, E> {
    fn new(
        tracker: &'t mut AvailabilityTracker<'a>,
        passengers: &'p mut [Passenger<E>],
        members: &'p [usize],
    ) -> Self {
        let mut anchors = HashMap::new();
        for &i in members {
            let passenger = &passengers[i];
            if let Some(seat_id) = passenger.seat_id {
                if tracker.seat(seat_id).is_some() {
                    anchors.entry(passenger.seat_class_id).or_insert(seat_id);
                }
            }
        }

        Self {
            tracker,
            passengers,
            members,
            anchors,
        }
    }

    fn run(mut self) {
        let minors: Vec<usize> = self
            .members
            .iter()
            .copied()
            .filter(|&i| !self.passengers[i].is_seated() && self.passengers[i].is_minor())
            .collect();

        for minor in minors {
            self.seat_minor(minor);
        }

        let members = self.members;
        for &i in members {
            if self.passengers[i].is_seated() {
                continue;
            }
            let class = self.passengers[i].seat_class_id;
            let anchor = self.anchors.get(&class).copied();
            if let Some(seat) = self.tracker.best_seat(class, anchor) {
                self.give(i, seat);
                self.anchors.entry(class).or_insert(seat);
            }
        }
    }

    fn seat_minor(&mut self, minor: usize) {
        let class = self.passengers[minor].seat_class_id;

        if let Some(adult_seat) = self.find_adult(class, true).and_then(|i| self.passengers[i].seat_id) {
            if let Some(seat) = self.tracker.adjacent_free_seat(class, adult_seat) {
                self.give(minor, seat);
                self.anchors.entry(class).or_insert(adult_seat);
                return;
            }
        }

        let anchor = self.anchors.get(&class).copied();

        if let Some(adult) = self.find_adult(class, false) {
            if let Some((adult_seat, minor_seat)) = self.tracker.best_adjacent_pair(class, anchor) {
                self.give(adult, adult_seat);
                self.give(minor, minor_seat);
                self.anchors.insert(class, adult_seat);
                return;
            }
        }

        if let Some(seat) = self.tracker.best_seat(class, anchor) {
            self.give(minor, seat);
            self.anchors.entry(class).or_insert(seat);
        }
    }

    /// First adult of the purchase in `class` that is (or is not) seated.
    fn find_adult(&self, class: SeatClassId, seated: bool) -> Option<usize> {
        self.members.iter().copied().find(|&i| {
            let p = &self.passengers[i];
            p.is_adult() && p.is_seated() == seated && p.seat_class_id == class
        })
    }

    fn give(&mut self, passenger: usize, seat: SeatId) {
        self.passengers[passenger].seat_id = Some(seat);
        self.tracker.take_seat(seat);
    }
}
