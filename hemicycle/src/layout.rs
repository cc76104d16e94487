use tracing::debug;

use crate::config::ChamberConfig;

/// Pixel coordinates, origin at the top left, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Seats of one arc, left to right.
pub type Row = Vec<Point>;

/// Returns the point at `angle` (radians) on the circle of the given radius
/// and center, in an upper left origin coordinate system.
fn circle_point(radius: f64, (cx, cy): (f64, f64), angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point {
        x: cos * radius + cx,
        y: cy - sin * radius,
    }
}

fn make_row(config: &ChamberConfig, r: usize) -> Row {
    let radius = config.row_radius(r);
    let center = config.center();
    let start = config.start_angle();
    let step = config.angle_step();
    (0..config.seats_per_row())
        .map(|p| circle_point(radius, center, start - p as f64 * step))
        .collect()
}

/// Seat centers of every row, innermost row first. Each row sweeps from the
/// left end of its arc to the right end.
pub fn compute_rows(config: &ChamberConfig) -> Vec<Row> {
    let rows: Vec<Row> = (0..config.rows()).map(|r| make_row(config, r)).collect();
    debug!(
        rows = rows.len(),
        seats_per_row = config.seats_per_row(),
        "computed chamber layout"
    );
    rows
}
