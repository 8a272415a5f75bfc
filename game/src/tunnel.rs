use rltk::{Point, RandomNumberGenerator};

/// Source of the fair coin used to pick a tunnel's corner.
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

impl CoinFlip for RandomNumberGenerator {
    fn flip(&mut self) -> bool {
        self.range(0, 2) == 1
    }
}

/// L-shaped orthogonal path from `start` to `end`, both ends included.
///
/// Heads horizontally first on heads, vertically first on tails. The corner
/// cell appears once, so consecutive points are always exactly one step apart.
pub fn tunnel_between(
    start: Point,
    end: Point,
    coin: &mut dyn CoinFlip,
) -> impl Iterator<Item = Point> {
    let corner = if coin.flip() {
        Point::new(end.x, start.y)
    } else {
        Point::new(start.x, end.y)
    };

    rltk::line2d_bresenham(start, corner)
        .into_iter()
        .chain(rltk::line2d_bresenham(corner, end).into_iter().skip(1))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // b is exactly one cell away from a along a single axis
    pub(crate) fn is_unit_step(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() + (a.y - b.y).abs() == 1
    }

    #[test]
    fn unit_step_rejects_diagonals_and_repeats() {
        assert!(is_unit_step(Point::new(3, 3), Point::new(3, 4)));
        assert!(is_unit_step(Point::new(3, 3), Point::new(2, 3)));
        assert!(!is_unit_step(Point::new(3, 3), Point::new(4, 4)));
        assert!(!is_unit_step(Point::new(3, 3), Point::new(3, 3)));
        assert!(!is_unit_step(Point::new(3, 3), Point::new(5, 3)));
    }

    struct FixedCoin(bool);

    impl CoinFlip for FixedCoin {
        fn flip(&mut self) -> bool {
            self.0
        }
    }

    fn walk(start: (i32, i32), end: (i32, i32), heads: bool) -> Vec<(i32, i32)> {
        tunnel_between(
            Point::new(start.0, start.1),
            Point::new(end.0, end.1),
            &mut FixedCoin(heads),
        )
        .map(|p| (p.x, p.y))
        .collect()
    }

    #[test]
    fn straight_row_needs_no_corner() {
        let expected = vec![(0, 0), (1, 0), (2, 0), (3, 0)];
        assert_eq!(walk((0, 0), (3, 0), true), expected);
        assert_eq!(walk((0, 0), (3, 0), false), expected);
    }

    #[test]
    fn heads_goes_horizontal_first() {
        let path = walk((1, 1), (3, 3), true);
        assert_eq!(path, vec![(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn tails_goes_vertical_first() {
        let path = walk((1, 1), (3, 3), false);
        assert_eq!(path, vec![(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn runs_backwards_too() {
        let path = walk((5, 4), (2, 1), true);
        assert_eq!(path.first(), Some(&(5, 4)));
        assert_eq!(path.last(), Some(&(2, 1)));
        assert!(path.contains(&(2, 4)));
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn same_start_and_end_is_one_cell() {
        assert_eq!(walk((4, 4), (4, 4), true), vec![(4, 4)]);
    }

    #[test]
    fn every_step_is_orthogonal() {
        let mut rng = RandomNumberGenerator::seeded(7);
        for _ in 0..50 {
            let (sx, sy): (i32, i32) = (rng.range(0, 40), rng.range(0, 40));
            let (ex, ey): (i32, i32) = (rng.range(0, 40), rng.range(0, 40));
            let start = Point::new(sx, sy);
            let end = Point::new(ex, ey);
            let path: Vec<Point> = tunnel_between(start, end, &mut rng).collect();

            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            let manhattan = (start.x - end.x).abs() + (start.y - end.y).abs();
            assert_eq!(path.len() as i32, manhattan + 1);
            for pair in path.windows(2) {
                assert!(is_unit_step(pair[0], pair[1]));
            }
        }
    }
}
