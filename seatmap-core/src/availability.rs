use std::collections::{HashMap, HashSet};

use crate::geometry::{distance, is_adjacent};
use crate::ids::{SeatClassId, SeatId};
use crate::layout::{Coordinate, Layout};
use crate::seat::Seat;

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    seat: &'a Seat,
    coordinate: Coordinate,
}

#[derive(Debug, Default)]
struct ClassPool<'a> {
    /// Sorted by (row, block, position); the order every tie is broken by.
    candidates: Vec<Candidate<'a>>,
    free: HashSet<SeatId>,
}

impl<'a> ClassPool<'a> {
    fn free_candidates(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.candidates
            .iter()
            .filter(|c| self.free.contains(&c.seat.seat_id))
    }
}

/// Free seats of one flight, per cabin class.
///
/// Built fresh for every assignment run and mutated only through
/// [`AvailabilityTracker::take_seat`].
#[derive(Debug)]
pub struct AvailabilityTracker<'a> {
    layout: &'a Layout,
    seats: HashMap<SeatId, Candidate<'a>>,
    pools: HashMap<SeatClassId, ClassPool<'a>>,
}

impl<'a> AvailabilityTracker<'a> {
    /// Every seat in `seats` starts free except those listed in `held`.
    pub fn new(layout: &'a Layout, seats: &'a [Seat], held: impl IntoIterator<Item = SeatId>) -> Self {
        let held: HashSet<SeatId> = held.into_iter().collect();

        let mut by_id = HashMap::with_capacity(seats.len());
        let mut pools: HashMap<SeatClassId, ClassPool<'a>> = HashMap::new();

        for seat in seats {
            let candidate = Candidate {
                seat,
                coordinate: layout.coordinate(seat),
            };
            by_id.insert(seat.seat_id, candidate);
            pools.entry(seat.class_id).or_default().candidates.push(candidate);
        }

        for pool in pools.values_mut() {
            pool.candidates.sort_by_key(|c| (c.coordinate.row, c.coordinate.block, c.coordinate.position));
            pool.free = pool
                .candidates
                .iter()
                .map(|c| c.seat.seat_id)
                .filter(|id| !held.contains(id))
                .collect();
        }

        Self {
            layout,
            seats: by_id,
            pools,
        }
    }

    pub fn seat(&self, seat_id: SeatId) -> Option<&'a Seat> {
        self.seats.get(&seat_id).map(|c| c.seat)
    }

    pub fn coordinate(&self, seat_id: SeatId) -> Option<Coordinate> {
        self.seats.get(&seat_id).map(|c| c.coordinate)
    }

    pub fn is_free(&self, seat_id: SeatId) -> bool {
        self.seats
            .get(&seat_id)
            .and_then(|c| self.pools.get(&c.seat.class_id))
            .is_some_and(|pool| pool.free.contains(&seat_id))
    }

    pub fn free_count(&self, class_id: SeatClassId) -> usize {
        self.pools.get(&class_id).map_or(0, |pool| pool.free.len())
    }

    /// Marks a seat as no longer available. Unknown seat ids are ignored.
    pub fn take_seat(&mut self, seat_id: SeatId) -> bool {
        let Some(candidate) = self.seats.get(&seat_id) else {
            return false;
        };
        self.pools
            .get_mut(&candidate.seat.class_id)
            .is_some_and(|pool| pool.free.remove(&seat_id))
    }

    /// Free seat of `class_id` closest to `anchor`, or the first free one
    /// when there is no anchor.
    pub fn best_seat(&self, class_id: SeatClassId, anchor: Option<SeatId>) -> Option<SeatId> {
        let pool = self.pools.get(&class_id)?;
        let mut free = pool.free_candidates();

        let Some(anchor) = anchor.and_then(|id| self.coordinate(id)) else {
            return free.next().map(|c| c.seat.seat_id);
        };

        let mut best: Option<(i64, SeatId)> = None;
        for candidate in free {
            let d = distance(candidate.coordinate, anchor);
            if best.map_or(true, |(best_d, _)| d < best_d) {
                best = Some((d, candidate.seat.seat_id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Free seat of `class_id` directly beside `seat_id` in the same block
    /// and row, left neighbor checked first.
    pub fn adjacent_free_seat(&self, class_id: SeatClassId, seat_id: SeatId) -> Option<SeatId> {
        let pool = self.pools.get(&class_id)?;
        let seat = self.seat(seat_id)?;

        for column in self.layout.adjacent_columns(&seat.column).iter() {
            let neighbor = pool
                .candidates
                .iter()
                .find(|c| c.seat.row == seat.row && c.seat.normalized_column() == column);

            if let Some(neighbor) = neighbor {
                if pool.free.contains(&neighbor.seat.seat_id) {
                    return Some(neighbor.seat.seat_id);
                }
            }
        }
        None
    }

    /// Best pair of free, adjacent seats of `class_id`, lower seat id first.
    ///
    /// With an anchor a pair scores the sum of both seats' distances to it;
    /// without one it scores by row only. Ties keep the pair met first.
    pub fn best_adjacent_pair(&self, class_id: SeatClassId, anchor: Option<SeatId>) -> Option<(SeatId, SeatId)> {
        let pool = self.pools.get(&class_id)?;
        let anchor = anchor.and_then(|id| self.coordinate(id));
        let free: Vec<&Candidate<'a>> = pool.free_candidates().collect();

        let mut best: Option<(i64, SeatId, SeatId)> = None;
        for (i, a) in free.iter().enumerate() {
            let same_row = free[i + 1..]
                .iter()
                .take_while(|b| b.coordinate.row == a.coordinate.row);

            for b in same_row {
                if !is_adjacent(a.coordinate, b.coordinate) {
                    continue;
                }

                let score = match anchor {
                    Some(anchor) => distance(a.coordinate, anchor) + distance(b.coordinate, anchor),
                    None => a.coordinate.row * 10,
                };

                if best.map_or(true, |(best_score, _, _)| score < best_score) {
                    let (x, y) = (a.seat.seat_id, b.seat.seat_id);
                    best = Some(if x < y { (score, x, y) } else { (score, y, x) });
                }
            }
        }
        best.map(|(_, x, y)| (x, y))
    }
}
