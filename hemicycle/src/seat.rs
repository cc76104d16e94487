//! Seat numbering.
//!
//! Seats are numbered radially first: seat `i` sits in row `i % rows` at
//! position `i / rows` along that row. Seat 0 is the leftmost seat of the
//! innermost row, seat 1 the leftmost seat of the second row, and so on until
//! every row has its first seat, then the sweep moves one position right.

use std::collections::BTreeSet;

use num_integer::div_rem;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::{Point, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatIndex(pub usize);

impl SeatIndex {
    /// `(row, position)` of this seat in a chamber with `rows` rows.
    pub fn row_position(self, rows: usize) -> (usize, usize) {
        let (position, row) = div_rem(self.0, rows);
        (row, position)
    }

    /// Looks the seat up in `rows`, failing instead of panicking when the
    /// index falls outside the chamber.
    pub fn resolve(self, rows: &[Row]) -> Result<Point> {
        let out_of_range = || Error::SeatOutOfRange {
            seat: self.0,
            capacity: capacity(rows),
        };
        if rows.is_empty() {
            return Err(out_of_range());
        }
        let (row, position) = self.row_position(rows.len());
        rows.get(row)
            .and_then(|r| r.get(position))
            .copied()
            .ok_or_else(out_of_range)
    }
}

/// Number of seats in a row table, assuming every row has the length of the
/// first one.
pub fn capacity(rows: &[Row]) -> usize {
    rows.first().map_or(0, |r| rows.len() * r.len())
}

/// Reserved seat indices that never receive a party color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipSet(BTreeSet<usize>);

impl SkipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, seat: usize) -> bool {
        self.0.contains(&seat)
    }

    pub fn insert(&mut self, seat: usize) -> bool {
        self.0.insert(seat)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Fails on the first index that does not exist in a chamber of
    /// `capacity` seats.
    pub fn check_within(&self, capacity: usize) -> Result<()> {
        match self.0.range(capacity..).next() {
            Some(seat) => Err(Error::InvalidConfig(format!(
                "reserved seat {} is outside a chamber of {} seats",
                seat, capacity
            ))),
            None => Ok(()),
        }
    }
}

impl FromIterator<usize> for SkipSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[usize; N]> for SkipSet {
    fn from(seats: [usize; N]) -> Self {
        seats.into_iter().collect()
    }
}
