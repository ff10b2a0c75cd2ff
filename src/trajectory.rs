use serde::{Deserialize, Serialize};

/// Count of the tracked variant at generation `t`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub t: u32,
    pub n: f64,
}

impl Point {
    pub fn new(t: u32, n: f64) -> Self {
        Self { t, n }
    }
}

/// Time-ordered allele counts.
///
/// Every trajectory starts at `(0, 0)`: the variant is
/// absent from the founding population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Trajectory {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity.max(1));
        points.push(Point::new(0, 0.0));
        Self { points }
    }

    pub(crate) fn push(&mut self, t: u32, n: f64) {
        debug_assert!(self.points.last().map_or(true, |p| p.t < t));
        self.points.push(Point::new(t, n));
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: the origin is always present.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Point {
        // Never empty: constructed with the origin.
        self.points[self.points.len() - 1]
    }

    /// Count at generation `t`, if recorded.
    pub fn count_at(&self, t: u32) -> Option<f64> {
        self.points.get(t as usize).map(|p| p.n)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let t = Trajectory::new();
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.last(), Point::new(0, 0.0));
    }

    #[test]
    fn test_count_at_indexes_by_generation() {
        let mut t = Trajectory::with_capacity(3);
        t.push(1, 2.5);
        t.push(2, 4.0);
        assert_eq!(t.count_at(0), Some(0.0));
        assert_eq!(t.count_at(2), Some(4.0));
        assert_eq!(t.count_at(3), None);
    }

    #[test]
    fn test_serializes_as_point_list() {
        let mut t = Trajectory::new();
        t.push(1, 3.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[{"t":0,"n":0.0},{"t":1,"n":3.0}]"#);
    }
}
