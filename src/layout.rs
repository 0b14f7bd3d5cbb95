use log::{debug, trace};

use crate::error::{RectGridError, Result};
use crate::geometry::Rectangle;

/// How parsed rectangles are placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Pull each rectangle to within `max_gap` of the one placed before it
    #[default]
    Relative,
    /// Keep the coordinates exactly as parsed
    Precise,
}

pub fn apply_layout(rects: &[Rectangle], mode: LayoutMode, max_gap: i32) -> Result<Vec<Rectangle>> {
    match mode {
        LayoutMode::Relative => adjust_rectangles(rects, max_gap),
        LayoutMode::Precise => Ok(rects.to_vec()),
    }
}

/// Sort by `y1` and re-anchor every rectangle after the first so its leading
/// edge is at most `max_gap` past the previous placed rectangle's far edge.
///
/// The gap is measured from the rectangle's original position to the
/// previous rectangle's adjusted position. Width and height never change;
/// a rectangle whose moved corners would leave the i32 range is an error.
pub fn adjust_rectangles(rects: &[Rectangle], max_gap: i32) -> Result<Vec<Rectangle>> {
    let mut sorted = rects.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(|rect| rect.y1);

    let mut adjusted: Vec<Rectangle> = Vec::with_capacity(sorted.len());
    for rect in sorted {
        let Some(prev) = adjusted.last().copied() else {
            adjusted.push(rect);
            continue;
        };

        let x1 = clamp_leading_edge(rect.x1, prev.x2, max_gap);
        let y1 = clamp_leading_edge(rect.y1, prev.y2, max_gap);
        let moved = place(rect, x1, y1)?;

        if moved != rect {
            trace!("moved {:?} to {:?}", rect, moved);
        }
        adjusted.push(moved);
    }

    debug!("adjusted {} rectangles with max gap {}", adjusted.len(), max_gap);
    Ok(adjusted)
}

fn clamp_leading_edge(start: i32, prev_end: i32, max_gap: i32) -> i64 {
    let limit = i64::from(prev_end) + i64::from(max_gap);
    if i64::from(start) > limit {
        limit
    } else {
        i64::from(start)
    }
}

fn place(rect: Rectangle, x1: i64, y1: i64) -> Result<Rectangle> {
    let corner = |value: i64| i32::try_from(value).map_err(|_| RectGridError::CoordinateOverflow { rect });
    Ok(Rectangle::new(
        corner(x1)?,
        corner(y1)?,
        corner(x1 + rect.width())?,
        corner(y1 + rect.height())?,
    ))
}
