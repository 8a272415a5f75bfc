use rltk::{BTerm, Point};
use util::vec_ops;

use crate::tile_types::{Graphic, TileKind, WALL};

pub const MAPWIDTH: i32 = 80;
pub const MAPHEIGHT: i32 = 50;

/// Anything a map can be drawn onto, one cell at a time.
pub trait DrawTarget {
    fn draw_cell(&mut self, x: i32, y: i32, graphic: &Graphic);
}

impl DrawTarget for BTerm {
    fn draw_cell(&mut self, x: i32, y: i32, graphic: &Graphic) {
        self.set(x, y, graphic.fg_rgb(), graphic.bg_rgb(), graphic.font_char());
    }
}

/// Dense grid of tile kinds, stored row-major.
#[derive(Clone, Debug)]
pub struct Map {
    pub tiles: Vec<TileKind>,
    pub width: i32,
    pub height: i32,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Map {
        assert!(
            width > 0 && height > 0,
            "map dimensions must be positive, got {}x{}",
            width,
            height
        );

        Map {
            tiles: vec![WALL; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn xy_flat(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    pub fn tile(&self, x: i32, y: i32) -> TileKind {
        assert!(self.in_bounds(x, y), "({}, {}) is outside the map", x, y);
        self.tiles[self.xy_flat(x, y)]
    }

    pub fn set_tile(&mut self, x: i32, y: i32, kind: TileKind) {
        assert!(self.in_bounds(x, y), "({}, {}) is outside the map", x, y);
        let idx = self.xy_flat(x, y);
        self.tiles[idx] = kind;
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).walkable
    }

    pub fn render(&self, target: &mut dyn DrawTarget) {
        let mut x = 0;
        let mut y = 0;

        for tile in self.tiles.iter() {
            target.draw_cell(x, y, &tile.dark);

            x += 1;
            if x >= self.width {
                y += 1;
                x = 0;
            }
        }
    }

    /// Number of walkable cells reachable from `start` by orthogonal steps.
    pub fn reachable_count(&self, start: Point) -> usize {
        if !self.in_bounds(start.x, start.y) || !self.is_walkable(start.x, start.y) {
            return 0;
        }

        let mut seen = vec![false; self.tiles.len()];
        let mut open = vec![(start.x, start.y)];
        seen[self.xy_flat(start.x, start.y)] = true;
        let mut count = 0;

        while let Some(pos) = open.pop() {
            count += 1;
            for (nx, ny) in
                vec_ops::orthogonal_neighbors(pos, (0, 0), (self.width - 1, self.height - 1))
            {
                let idx = self.xy_flat(nx, ny);
                if !seen[idx] && self.tiles[idx].walkable {
                    seen[idx] = true;
                    open.push((nx, ny));
                }
            }
        }

        count
    }
}
