//! Ink model: the strokes drawn on the pad, independent of any canvas.

/// A point in canvas pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel rectangle inside the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// All strokes drawn since the last clear
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ink {
    strokes: Vec<Vec<Point>>,
}

impl Ink {
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Start a new stroke. A single point is already visible ink (a dot).
    pub fn begin_stroke(&mut self, point: Point) {
        self.strokes.push(vec![point]);
    }

    /// Append to the current stroke, returning the previous point so the
    /// caller can draw the connecting segment.
    pub fn extend_stroke(&mut self, point: Point) -> Option<Point> {
        let stroke = self.strokes.last_mut()?;
        let previous = stroke.last().copied();
        stroke.push(point);
        previous
    }

    /// Bounding box of the ink grown by `margin` on each side, clamped to a
    /// `canvas_width` x `canvas_height` canvas. `None` when nothing is drawn.
    pub fn bounds(&self, margin: f64, canvas_width: f64, canvas_height: f64) -> Option<Bounds> {
        let mut points = self.strokes.iter().flatten();
        let first = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let left = (min_x - margin).floor().clamp(0.0, canvas_width);
        let top = (min_y - margin).floor().clamp(0.0, canvas_height);
        let right = (max_x + margin).ceil().clamp(0.0, canvas_width);
        let bottom = (max_y + margin).ceil().clamp(0.0, canvas_height);

        Some(Bounds {
            x: left as u32,
            y: top as u32,
            width: ((right - left) as u32).max(1),
            height: ((bottom - top) as u32).max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ink_has_no_bounds() {
        let ink = Ink::default();
        assert!(ink.is_empty());
        assert_eq!(ink.bounds(2.0, 300.0, 100.0), None);
    }

    #[test]
    fn test_extend_returns_previous_point() {
        let mut ink = Ink::default();
        assert_eq!(ink.extend_stroke(Point::new(1.0, 1.0)), None);

        ink.begin_stroke(Point::new(10.0, 10.0));
        assert_eq!(ink.extend_stroke(Point::new(20.0, 15.0)), Some(Point::new(10.0, 10.0)));
        assert_eq!(ink.extend_stroke(Point::new(30.0, 12.0)), Some(Point::new(20.0, 15.0)));
        assert_eq!(ink.stroke_count(), 1);
    }

    #[test]
    fn test_bounds_cover_all_strokes_with_margin() {
        let mut ink = Ink::default();
        ink.begin_stroke(Point::new(50.0, 40.0));
        ink.extend_stroke(Point::new(80.0, 60.0));
        ink.begin_stroke(Point::new(120.5, 20.0));

        let bounds = ink.bounds(2.0, 300.0, 100.0).unwrap();
        assert_eq!(bounds, Bounds { x: 48, y: 18, width: 75, height: 44 });
    }

    #[test]
    fn test_bounds_clamped_to_canvas() {
        let mut ink = Ink::default();
        ink.begin_stroke(Point::new(1.0, 1.0));
        ink.extend_stroke(Point::new(299.0, 99.0));

        let bounds = ink.bounds(5.0, 300.0, 100.0).unwrap();
        assert_eq!(bounds, Bounds { x: 0, y: 0, width: 300, height: 100 });
    }

    #[test]
    fn test_single_dot_is_ink() {
        let mut ink = Ink::default();
        ink.begin_stroke(Point::new(10.0, 10.0));
        assert!(!ink.is_empty());

        let bounds = ink.bounds(0.0, 300.0, 100.0).unwrap();
        assert_eq!((bounds.width, bounds.height), (1, 1));

        ink.clear();
        assert!(ink.is_empty());
    }
}
