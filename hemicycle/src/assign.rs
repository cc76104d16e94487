use color_lib::color::{parse_hex, sRGB, to_string};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::layout::{Point, Row};
use crate::seat::{capacity, SeatIndex, SkipSet};

/// Painted in place of a party color that does not parse.
pub const FALLBACK_COLOR: sRGB = [0x80, 0x80, 0x80];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyGroup {
    pub seats: usize,
    pub color: String,
    pub name: Option<String>,
}

impl PartyGroup {
    pub fn new(seats: usize, color: impl Into<String>) -> Self {
        Self {
            seats,
            color: color.into(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.color)
    }
}

/// One seat to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub seat: SeatIndex,
    pub point: Point,
    pub color: sRGB,
}

/// Next seat index to hand out. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    seat: usize,
}

impl Cursor {
    pub fn seat(&self) -> usize {
        self.seat
    }

    fn skip_reserved(mut self, skip: &SkipSet) -> Self {
        while skip.contains(self.seat) {
            self.seat += 1;
        }
        self
    }

    fn advance(self) -> Self {
        Self {
            seat: self.seat + 1,
        }
    }
}

/// Parses a party color, falling back to [`FALLBACK_COLOR`].
pub fn resolve_color(hex: &str) -> sRGB {
    match parse_hex(hex) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, fallback = %to_string(&FALLBACK_COLOR), "unparseable party color");
            FALLBACK_COLOR
        }
    }
}

/// Hands `count` seats to `color`, starting at `cursor`, and returns the
/// cursor past the last seat used.
pub fn place_group(
    rows: &[Row],
    skip: &SkipSet,
    cursor: Cursor,
    count: usize,
    color: sRGB,
) -> Result<(Cursor, Vec<DrawCommand>)> {
    let mut commands = Vec::with_capacity(count);
    let mut cursor = cursor;
    for _ in 0..count {
        cursor = cursor.skip_reserved(skip);
        let seat = SeatIndex(cursor.seat);
        commands.push(DrawCommand {
            seat,
            point: seat.resolve(rows)?,
            color,
        });
        cursor = cursor.advance();
    }
    Ok((cursor, commands))
}

/// Assigns seats to `parties` in order, then paints every seat left over with
/// `unaffiliated`. Seats in `skip` are passed over and never drawn.
///
/// Fails before producing anything if the parties ask for more seats than
/// the chamber has once the reserved ones are taken out.
pub fn assign(
    rows: &[Row],
    skip: &SkipSet,
    parties: &[PartyGroup],
    unaffiliated: &str,
) -> Result<Vec<DrawCommand>> {
    let capacity = capacity(rows);
    skip.check_within(capacity)?;

    let available = capacity - skip.len();
    let requested = parties
        .iter()
        .fold(0usize, |acc, p| acc.saturating_add(p.seats));
    if requested > available {
        return Err(Error::SeatOverflow {
            requested,
            available,
        });
    }

    let (cursor, mut commands) = parties.iter().try_fold(
        (Cursor::default(), Vec::with_capacity(available)),
        |(cursor, mut acc), party| {
            let (next, placed) =
                place_group(rows, skip, cursor, party.seats, resolve_color(&party.color))?;
            debug!(
                party = party.label(),
                seats = party.seats,
                first = cursor.seat,
                next = next.seat,
                "placed party"
            );
            acc.extend(placed);
            Ok::<_, Error>((next, acc))
        },
    )?;

    let (end, rest) = place_group(
        rows,
        skip,
        cursor,
        available - requested,
        resolve_color(unaffiliated),
    )?;
    debug!(unaffiliated = rest.len(), end = end.seat, "filled remaining seats");
    commands.extend(rest);
    Ok(commands)
}
