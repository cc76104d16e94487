//! Seat layout for a semicircular chamber.
//!
//! [`layout::compute_rows`] turns a [`ChamberConfig`] into concentric rows of
//! seat centers, and [`assign::assign`] walks those seats in the interleaved
//! order described in [`seat`] to produce one [`DrawCommand`] per seat.

pub mod assign;
pub mod config;
pub mod error;
pub mod layout;
pub mod preset;
pub mod seat;

pub use assign::{assign, DrawCommand, PartyGroup, FALLBACK_COLOR};
pub use config::{ChamberConfig, ChamberParams};
pub use error::{Error, Result};
pub use layout::{compute_rows, Point, Row};
pub use seat::{SeatIndex, SkipSet};

/// Lays out the chamber and assigns every seat in one pass.
pub fn plan_seats(
    config: &ChamberConfig,
    skip: &SkipSet,
    parties: &[PartyGroup],
    unaffiliated: &str,
) -> Result<Vec<DrawCommand>> {
    let rows = compute_rows(config);
    assign(&rows, skip, parties, unaffiliated)
}
