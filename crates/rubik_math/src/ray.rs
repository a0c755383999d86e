//! Ray type and axis-aligned-box intersection
//!
//! Used for picking: a pointer position becomes a world-space ray, which is
//! tested against the axis-aligned boxes of the cubelets.

use crate::Vec3;

/// A ray with a normalized direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Result of a ray/box intersection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance along the ray to the entry point
    pub t: f32,
    /// Outward axis-aligned normal of the face that was entered
    pub normal: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalized(),
        }
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Slab test against an axis-aligned box
    ///
    /// Returns the entry distance and face normal, or `None` if the ray
    /// misses the box or starts past it. Rays starting inside report no hit.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<RayHit> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_axis = 0usize;
        let mut enter_sign = -1.0f32;

        let origin = self.origin.to_array();
        let dir = self.dir.to_array();
        let lo = min.to_array();
        let hi = max.to_array();

        for axis in 0..3 {
            if dir[axis].abs() < 1e-8 {
                // Parallel to this slab: miss unless the origin is inside it
                if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir[axis];
            let mut t0 = (lo[axis] - origin[axis]) * inv;
            let mut t1 = (hi[axis] - origin[axis]) * inv;
            let mut sign = -1.0;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
                sign = 1.0;
            }

            if t0 > t_enter {
                t_enter = t0;
                enter_axis = axis;
                enter_sign = sign;
            }
            t_exit = t_exit.min(t1);

            if t_enter > t_exit {
                return None;
            }
        }

        if t_enter < 0.0 {
            return None;
        }

        let mut normal = [0.0f32; 3];
        normal[enter_axis] = enter_sign;
        Some(RayHit {
            t: t_enter,
            normal: Vec3::new(normal[0], normal[1], normal[2]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.at(3.0), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_hit_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let hit = ray
            .intersect_aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
            .unwrap();
        assert!((hit.t - 4.0).abs() < 0.0001);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_hit_side_face() {
        let ray = Ray::new(Vec3::new(5.0, 0.2, 0.3), -Vec3::X);
        let hit = ray
            .intersect_aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
            .unwrap();
        assert_eq!(hit.normal, Vec3::X);
    }

    #[test]
    fn test_miss() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 5.0), -Vec3::Z);
        let hit = ray.intersect_aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), -Vec3::Z);
        let hit = ray.intersect_aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_parallel_outside_slab() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), -Vec3::Z);
        let hit = ray.intersect_aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_diagonal_hit_reports_dominant_face() {
        // Shallow diagonal approach from +Z hits the +Z face first
        let ray = Ray::new(Vec3::new(0.2, 0.1, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = ray
            .intersect_aabb(Vec3::new(-0.5, -0.5, -0.5), Vec3::new(0.5, 0.5, 0.5))
            .unwrap();
        assert_eq!(hit.normal, Vec3::Z);
    }
}
