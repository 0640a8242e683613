//! Seat marker placement around dining tables.

use std::f64::consts::PI;

use crate::geometry::{CanvasSize, Point};
use crate::model::{PlacedObject, ShapeKind};

/// Distance of the seat ring from the rim of a round table.
pub const SEAT_RING_GAP_PX: f64 = 22.0;
/// Distance of the seat rows from the long edges of a rectangular table.
pub const SEAT_ROW_GAP_PX: f64 = 18.0;
/// Seat count used when an object records zero seats.
pub const DEFAULT_SEATS: u32 = 4;
/// Most seat markers placed around one table.
pub const MAX_SEATS: u32 = 64;

/// Pixel centers of the seat markers of a dining object.
///
/// Non-dining objects have no seats.
pub fn seat_positions(object: &PlacedObject, canvas: CanvasSize) -> Vec<Point> {
    if !object.is_dining() {
        return Vec::new();
    }
    let origin = object.position_px(canvas);
    let (width, height) = object.size_px(canvas);
    seat_positions_px(object.shape, origin, width, height, object.seats)
}

/// Seat centers for a table at `origin` with the given pixel size.
///
/// Circles get an evenly spaced ring starting straight above the center.
/// Every other shape gets a row above and a row below; the upper row takes
/// the extra seat when the count is odd. Counts above [`MAX_SEATS`] are
/// capped.
pub fn seat_positions_px(
    shape: ShapeKind,
    origin: Point,
    width: f64,
    height: f64,
    seats: u32,
) -> Vec<Point> {
    let count = if seats == 0 { DEFAULT_SEATS } else { seats.min(MAX_SEATS) } as usize;

    if shape == ShapeKind::Circle {
        let center = origin.offset(width / 2.0, height / 2.0);
        let radius = width.min(height) / 2.0 + SEAT_RING_GAP_PX;
        return (0..count)
            .map(|i| {
                let angle = -PI / 2.0 + 2.0 * PI * i as f64 / count as f64;
                center.offset(angle.cos() * radius, angle.sin() * radius)
            })
            .collect();
    }

    let top = count.div_ceil(2);
    let bottom = count - top;
    let row = |n: usize, y: f64| {
        (0..n).map(move |i| Point::new(origin.x + (i + 1) as f64 * width / (n + 1) as f64, y))
    };
    row(top, origin.y - SEAT_ROW_GAP_PX)
        .chain(row(bottom, origin.y + height + SEAT_ROW_GAP_PX))
        .collect()
}
