/// An axis-aligned rectangle given by two opposite integer corners.
///
/// Both corners are inclusive grid coordinates. `x1 <= x2` and `y1 <= y2`
/// is expected but not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rectangle {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // i64 so that a span wider than i32::MAX cannot overflow
    pub fn width(&self) -> i64 {
        i64::from(self.x2) - i64::from(self.x1)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.y2) - i64::from(self.y1)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x1..=self.x2).contains(&x) && (self.y1..=self.y2).contains(&y)
    }
}

/// Bounding box over a set of rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasExtremePoints {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CanvasExtremePoints {
    /// Returns `None` when `rects` is empty.
    pub fn from_rectangles(rects: &[Rectangle]) -> Option<Self> {
        let first = rects.first()?;
        let mut canvas = CanvasExtremePoints {
            min_x: first.x1,
            min_y: first.y1,
            max_x: first.x2,
            max_y: first.y2,
        };

        for rect in &rects[1..] {
            canvas.min_x = canvas.min_x.min(rect.x1);
            canvas.min_y = canvas.min_y.min(rect.y1);
            canvas.max_x = canvas.max_x.max(rect.x2);
            canvas.max_y = canvas.max_y.max(rect.y2);
        }

        Some(canvas)
    }

    // i64 so that extreme i32 corners cannot overflow
    pub fn cells_x(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x) + 1
    }

    pub fn cells_y(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y) + 1
    }
}
