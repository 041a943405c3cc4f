//! Midpoint circle rasterisation
//!
//! Yields the outline points in the order they are plotted: the four axis
//! points first, then eight symmetric points per step. When the walk ends
//! exactly on the diagonal the four diagonal points are emitted once more
//! so the 45 degree spots are the last bytes written.

/// Outline of a circle centred at (`cx`, `cy`)
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    cx: i16,
    cy: i16,
    f: i16,
    ddf_x: i16,
    ddf_y: i16,
    x: i16,
    y: i16,
    pending: [(i16, i16); 8],
    len: usize,
    next: usize,
    started: bool,
    finished: bool,
}

impl MidpointCircle {
    pub fn new(cx: i16, cy: i16, radius: i16) -> Self {
        Self {
            cx,
            cy,
            f: 1 - radius,
            ddf_x: 1,
            ddf_y: -2 * radius,
            x: 0,
            y: radius,
            pending: [(0, 0); 8],
            len: 0,
            next: 0,
            started: false,
            finished: false,
        }
    }

    fn queue_axis_points(&mut self) {
        let (cx, cy, r) = (self.cx, self.cy, self.y);
        self.pending[..4].copy_from_slice(&[
            (cx, cy + r),
            (cx, cy - r),
            (cx + r, cy),
            (cx - r, cy),
        ]);
        self.len = 4;
        self.next = 0;
    }

    fn queue_diagonal(&mut self) {
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        self.pending[..4].copy_from_slice(&[
            (cx + x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy + y),
            (cx - x, cy - y),
        ]);
        self.len = 4;
        self.next = 0;
    }

    fn queue_octants(&mut self) {
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        self.pending = [
            (cx + x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy + y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy + x),
            (cx - y, cy - x),
        ];
        self.len = 8;
        self.next = 0;
    }
}

impl Iterator for MidpointCircle {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.len {
            let point = self.pending[self.next];
            self.next += 1;
            return Some(point);
        }

        if !self.started {
            self.started = true;
            self.queue_axis_points();
            return self.next();
        }

        if self.x >= self.y {
            if self.finished || self.x != self.y {
                return None;
            }
            self.finished = true;
            self.queue_diagonal();
            return self.next();
        }

        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;

        self.queue_octants();
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_two_outline() {
        let points: Vec<_> = MidpointCircle::new(38, 54, 2).collect();

        assert_eq!(points.len(), 4 + 8 + 8);
        assert_eq!(&points[..4], &[(38, 56), (38, 52), (40, 54), (36, 54)]);
        assert_eq!(points[4], (39, 56));
        assert_eq!(points[12], (40, 55));
    }

    #[test]
    fn test_radius_three_replots_diagonal() {
        let points: Vec<_> = MidpointCircle::new(0, 0, 3).collect();

        // 4 axis points, two octant steps, then the diagonal again
        assert_eq!(points.len(), 4 + 8 + 8 + 4);
        assert_eq!(&points[12..16], &[(2, 2), (2, -2), (-2, 2), (-2, -2)]);
        assert_eq!(&points[20..], &[(2, 2), (2, -2), (-2, 2), (-2, -2)]);
    }

    #[test]
    fn test_no_diagonal_replot_off_diagonal_exit() {
        // Radius 2 leaves the loop at x=2, y=1
        let points: Vec<_> = MidpointCircle::new(0, 0, 2).collect();
        assert_eq!(points.len(), 20);
        assert_eq!(points.last(), Some(&(-1, -2)));
    }

    #[test]
    fn test_points_on_ring() {
        for r in 1..8i16 {
            for (x, y) in MidpointCircle::new(0, 0, r) {
                let d2 = x * x + y * y;
                // Midpoint rasterisation stays within half a pixel of the ring
                assert!(d2 >= (r - 1) * (r - 1) && d2 <= (r + 1) * (r + 1));
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let points: Vec<_> = MidpointCircle::new(0, 0, 5).collect();
        for &(x, y) in &points {
            assert!(points.contains(&(-x, y)));
            assert!(points.contains(&(x, -y)));
            assert!(points.contains(&(y, x)));
        }
    }

    #[test]
    fn test_zero_radius() {
        let points: Vec<_> = MidpointCircle::new(3, 3, 0).collect();
        assert!(points.iter().all(|&p| p == (3, 3)));
    }
}
