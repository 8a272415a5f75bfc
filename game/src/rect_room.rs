use rltk::{Point, Rect};

/// An axis-aligned room. The outer ring of cells is its wall and is never carved.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> RectangularRoom {
        assert!(
            width > 0 && height > 0,
            "room size must be positive, got {}x{}",
            width,
            height
        );

        RectangularRoom {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    // i32 division truncates toward zero
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Carvable area, half-open: x in `x1..x2`, y in `y1..y2` of the result.
    pub fn interior(&self) -> Rect {
        Rect {
            x1: self.x1 + 1,
            y1: self.y1 + 1,
            x2: self.x2,
            y2: self.y2,
        }
    }

    pub fn interior_points(&self) -> impl Iterator<Item = Point> {
        let Rect { x1, y1, x2, y2 } = self.interior();
        (y1..y2).flat_map(move |y| (x1..x2).map(move |x| Point::new(x, y)))
    }

    /// Shared edges count as overlap, so two accepted rooms always keep a wall between them.
    pub fn intersects(&self, other: &RectangularRoom) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}
