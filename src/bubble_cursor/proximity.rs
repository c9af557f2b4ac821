use avian3d::prelude::ColliderAabb;
use bevy::math::Vec3;

/// Added to every surface distance so a candidate in contact never measures as zero.
pub const CONTACT_BUFFER: f32 = 0.01;

/// Axis-aligned world-space extent of a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_size(center: Vec3, half_size: Vec3) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// True when the box has no volume to measure against, e.g. an AABB that the physics
    /// step has not computed yet.
    pub fn is_empty(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite() || self.min.cmpgt(self.max).any()
    }

    /// Closest point of the box to `point`; `point` itself when it lies inside.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.max(self.min).min(self.max)
    }
}

impl From<&ColliderAabb> for Bounds {
    fn from(aabb: &ColliderAabb) -> Self {
        Self::from_min_max(aabb.min, aabb.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityResult {
    /// Position of the winning candidate in scan order.
    pub index: usize,
    /// Buffered surface distance to the tracked point.
    pub distance: f32,
}

/// Scans `candidates` for the one whose surface is closest to `point`.
///
/// Distances include [`CONTACT_BUFFER`]. Ties keep the earliest candidate. Empty bounds are
/// skipped but still consume an index.
pub fn nearest_candidate<I>(point: Vec3, candidates: I) -> Option<ProximityResult>
where
    I: IntoIterator<Item = Bounds>,
{
    let mut nearest: Option<ProximityResult> = None;

    for (index, bounds) in candidates.into_iter().enumerate() {
        if bounds.is_empty() {
            continue;
        }

        let distance = bounds.closest_point(point).distance(point) + CONTACT_BUFFER;
        if nearest.is_none_or(|n| distance < n.distance) {
            nearest = Some(ProximityResult { index, distance });
        }
    }

    nearest
}

/// Maps the nearest candidate onto a cursor radius.
///
/// Out of reach (or nothing to reach) collapses to `min_radius`; otherwise the cursor grows
/// to touch the candidate, never below `min_radius`. Expects `min_radius <= max_radius`.
pub fn bubble_radius(nearest: Option<ProximityResult>, min_radius: f32, max_radius: f32) -> f32 {
    match nearest {
        Some(ProximityResult { distance, .. }) if distance <= max_radius => {
            distance.max(min_radius)
        }
        _ => min_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f32 = 0.1;
    const MAX: f32 = 0.5;
    const EPS: f32 = 1e-5;

    /// A small box whose nearest face sits `distance` away from the origin along +X.
    fn box_at(distance: f32) -> Bounds {
        Bounds::from_min_max(
            Vec3::new(distance, -0.1, -0.1),
            Vec3::new(distance + 0.2, 0.1, 0.1),
        )
    }

    fn radius_for(candidates: Vec<Bounds>) -> f32 {
        bubble_radius(nearest_candidate(Vec3::ZERO, candidates), MIN, MAX)
    }

    #[test]
    fn closest_point_clamps_to_surface() {
        let bounds = Bounds::from_center_half_size(Vec3::ZERO, Vec3::splat(1.0));

        assert_eq!(
            bounds.closest_point(Vec3::new(3.0, 0.5, -4.0)),
            Vec3::new(1.0, 0.5, -1.0)
        );
        assert_eq!(
            bounds.closest_point(Vec3::new(0.2, 0.3, 0.4)),
            Vec3::new(0.2, 0.3, 0.4)
        );
    }

    #[test]
    fn inverted_or_infinite_bounds_are_empty() {
        assert!(Bounds::from_min_max(Vec3::ONE, Vec3::ZERO).is_empty());
        assert!(Bounds::from_min_max(Vec3::NEG_INFINITY, Vec3::ZERO).is_empty());
        assert!(!Bounds::from_min_max(Vec3::ZERO, Vec3::ZERO).is_empty());
    }

    #[test]
    fn no_candidates_collapses_to_min_radius() {
        assert_eq!(nearest_candidate(Vec3::ZERO, Vec::new()), None);
        assert_eq!(radius_for(Vec::new()), MIN);
        assert_eq!(bubble_radius(None, 0.3, 0.3), 0.3);
    }

    #[test]
    fn candidate_within_reach_sets_buffered_radius() {
        let radius = radius_for(vec![box_at(0.25)]);
        assert!((radius - 0.26).abs() < EPS, "radius was {radius}");
        assert!((radius * 2.0 - 0.52).abs() < EPS);
    }

    #[test]
    fn candidate_out_of_reach_collapses_to_min_radius() {
        assert_eq!(radius_for(vec![box_at(0.6)]), MIN);
    }

    #[test]
    fn touching_candidate_floors_at_min_radius() {
        let nearest = nearest_candidate(Vec3::ZERO, vec![box_at(0.0)]).unwrap();
        assert!((nearest.distance - CONTACT_BUFFER).abs() < EPS);
        assert_eq!(bubble_radius(Some(nearest), MIN, MAX), MIN);
    }

    #[test]
    fn single_candidate_follows_buffered_distance_rule() {
        for step in 0..80 {
            let d = step as f32 * 0.01;
            let adjusted = d + CONTACT_BUFFER;
            if (adjusted - MAX).abs() < 1e-4 {
                continue;
            }
            let expected = if adjusted > MAX { MIN } else { adjusted.max(MIN) };

            let radius = radius_for(vec![box_at(d)]);
            assert!(
                (radius - expected).abs() < EPS,
                "distance {d}: expected {expected}, got {radius}"
            );
            assert!((MIN..=MAX).contains(&radius));
        }
    }

    #[test]
    fn nearest_of_several_wins() {
        let nearest =
            nearest_candidate(Vec3::ZERO, vec![box_at(0.4), box_at(0.2), box_at(0.3)]).unwrap();
        assert_eq!(nearest.index, 1);
        assert!((nearest.distance - 0.21).abs() < EPS);
    }

    #[test]
    fn ties_keep_first_in_scan_order() {
        let mirrored = Bounds::from_min_max(Vec3::new(-0.5, -0.1, -0.1), Vec3::new(-0.3, 0.1, 0.1));
        let nearest = nearest_candidate(Vec3::ZERO, vec![box_at(0.3), mirrored]).unwrap();
        assert_eq!(nearest.index, 0);

        let nearest = nearest_candidate(Vec3::ZERO, vec![mirrored, box_at(0.3)]).unwrap();
        assert_eq!(nearest.index, 0);
    }

    #[test]
    fn empty_bounds_are_skipped_but_counted() {
        let empty = Bounds::from_min_max(Vec3::ONE, Vec3::ZERO);
        let nearest = nearest_candidate(Vec3::ZERO, vec![empty, box_at(0.2)]).unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(radius_for(vec![empty]), MIN);
    }

    #[test]
    fn moving_closer_never_grows_the_bubble() {
        let mut previous = f32::INFINITY;
        for step in (0..60).rev() {
            let radius = radius_for(vec![box_at(0.9), box_at(step as f32 * 0.01)]);
            // Collapsing from out-of-reach to in-reach is the only allowed jump.
            if previous <= MAX && previous > MIN {
                assert!(radius <= previous + EPS, "{radius} > {previous}");
            }
            previous = radius;
        }
        assert_eq!(previous, MIN);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let candidates = vec![box_at(0.35), box_at(0.15)];
        let first = radius_for(candidates.clone());
        let second = radius_for(candidates);
        assert_eq!(first, second);
    }
}
