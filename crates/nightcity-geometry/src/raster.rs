//! Integer rasterization of lines and circle outlines onto a cell grid.
//!
//! Both rasterizers work purely in integer arithmetic and return the visited
//! cells as `(x, y)` pairs.

use alloc::vec::Vec;

/// A cell in an integer grid, `(x, y)`.
pub type Point = (i32, i32);

/// Rasterizes the segment from `(x0, y0)` to `(x1, y1)` with Bresenham's algorithm.
///
/// The returned cells are ordered from the start point to the end point, both
/// inclusive, and consecutive cells are 8-connected. All octants are handled,
/// including horizontal, vertical and diagonal segments. A zero-length segment
/// yields the single start cell.
pub fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Rasterizes the outline of a circle centred on `(cx, cy)` with the midpoint algorithm.
///
/// One octant is walked with the midpoint decision variable and mirrored into
/// the other seven, so the result holds `8` points per step and at most
/// `8 * (r + 1)` points. Points on octant boundaries (where `x == y`, or the
/// cardinal points) appear more than once; callers that need a set must
/// deduplicate themselves. A radius of zero yields the centre eight times.
pub fn midpoint_circle(cx: i32, cy: i32, r: i32) -> Vec<Point> {
    let r = r.max(0);
    let mut points = Vec::with_capacity(8 * (r as usize + 1));

    let mut x = r;
    let mut y = 0;
    let mut dx = 1 - (r << 1);
    let mut dy = 0;
    let mut err = 0;

    while x >= y {
        points.push((cx + x, cy + y));
        points.push((cx + y, cy + x));
        points.push((cx - y, cy + x));
        points.push((cx - x, cy + y));
        points.push((cx - x, cy - y));
        points.push((cx - y, cy - x));
        points.push((cx + y, cy - x));
        points.push((cx + x, cy - y));

        y += 1;
        err += dy;
        dy += 2;
        if (err << 1) + dx > 0 {
            x -= 1;
            err += dx;
            dx += 2;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_connected(points: &[Point]) {
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1, "{:?} -> {:?} is not 8-connected", a, b);
        }
    }

    #[test]
    fn test_horizontal_line() {
        let line = bresenham_line(5, 25, 45, 25);
        assert_eq!(line.len(), 41);
        assert_eq!(line[0], (5, 25));
        assert_eq!(*line.last().unwrap(), (45, 25));
        assert!(line.iter().all(|&(_, y)| y == 25));
        assert_connected(&line);
    }

    #[test]
    fn test_vertical_line() {
        let line = bresenham_line(25, 5, 25, 45);
        assert_eq!(line.len(), 41);
        assert!(line.iter().enumerate().all(|(i, &p)| p == (25, 5 + i as i32)));
    }

    #[test]
    fn test_diagonal_line() {
        let line = bresenham_line(0, 0, 4, 4);
        assert_eq!(line, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        let reversed = bresenham_line(4, -4, 0, 0);
        assert_eq!(reversed, vec![(4, -4), (3, -3), (2, -2), (1, -1), (0, 0)]);
    }

    #[test]
    fn test_single_point_line() {
        assert_eq!(bresenham_line(7, -3, 7, -3), vec![(7, -3)]);
    }

    #[test]
    fn test_lines_in_every_octant() {
        let targets = [
            (9, 2), (2, 9), (-2, 9), (-9, 2),
            (-9, -2), (-2, -9), (2, -9), (9, -2),
            (0, 7), (7, 0), (0, -7), (-7, 0),
        ];
        for &(tx, ty) in &targets {
            let line = bresenham_line(1, 1, 1 + tx, 1 + ty);
            assert_eq!(line[0], (1, 1));
            assert_eq!(*line.last().unwrap(), (1 + tx, 1 + ty));
            // Steps along the major axis only, so the length is fixed.
            assert_eq!(line.len() as i32, tx.abs().max(ty.abs()) + 1);
            assert_connected(&line);
        }
    }

    #[test]
    fn test_circle_cardinal_points() {
        for r in 0..20 {
            let circle = midpoint_circle(10, -4, r);
            for p in [(10 + r, -4), (10 - r, -4), (10, -4 + r), (10, -4 - r)] {
                assert!(circle.contains(&p), "radius {} misses {:?}", r, p);
            }
        }
    }

    #[test]
    fn test_circle_points_near_radius() {
        for r in 0..40 {
            let circle = midpoint_circle(3, 3, r);
            let lo = (r - 1).max(0).pow(2);
            let hi = (r + 1).pow(2);
            for &(x, y) in &circle {
                let d2 = (x - 3).pow(2) + (y - 3).pow(2);
                assert!(d2 >= lo && d2 <= hi, "radius {}: ({}, {}) at d2={}", r, x, y, d2);
            }
            assert!(circle.len() <= 8 * (r as usize + 1));
            assert_eq!(circle.len() % 8, 0);
        }
    }

    #[test]
    fn test_circle_keeps_duplicates() {
        // The first step emits (r, 0) and (0, r) twice each.
        let circle = midpoint_circle(0, 0, 5);
        let east = circle.iter().filter(|&&p| p == (5, 0)).count();
        assert_eq!(east, 2);

        let zero = midpoint_circle(2, 2, 0);
        assert_eq!(zero, vec![(2, 2); 8]);
    }
}
