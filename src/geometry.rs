use egui::Pos2;

/// Ordered sequence of points making up one stroke.
///
/// Points are only ever appended, never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Pos2>,
}

impl Polyline {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Start a polyline seeded with a single point
    pub fn starting_at(point: Pos2) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs. Empty for polylines shorter than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<Pos2>> for Polyline {
    fn from(points: Vec<Pos2>) -> Self {
        Self { points }
    }
}

impl FromIterator<Pos2> for Polyline {
    fn from_iter<I: IntoIterator<Item = Pos2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Calculate distance from a point to a line segment
pub fn distance_to_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}
