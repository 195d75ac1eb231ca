use glam::Vec3;

/// A ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centered at `center` extending `half` along each axis
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest object whose AABB is intersected by the ray.
pub fn pick_nearest<K>(ray: &Ray, aabbs: impl IntoIterator<Item = (K, Aabb)>) -> Option<K> {
    let mut best: Option<(K, f32)> = None;

    for (key, aabb) in aabbs {
        if let Some(dist) = ray_aabb(ray, &aabb) {
            if best.as_ref().is_none_or(|(_, d)| dist < *d) {
                best = Some((key, dist));
            }
        }
    }

    best.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32) -> Aabb {
        Aabb::from_center_half_extents(Vec3::new(x, 0.0, 0.0), Vec3::splat(0.5))
    }

    #[test]
    fn test_ray_hits_box_in_front() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        let dist = ray_aabb(&ray, &unit_box_at(0.0)).unwrap();
        assert!((dist - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_box_behind() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::Z,
        };
        assert!(ray_aabb(&ray, &unit_box_at(0.0)).is_none());
    }

    #[test]
    fn test_ray_from_inside_box() {
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        };
        let dist = ray_aabb(&ray, &unit_box_at(0.0)).unwrap();
        assert!((dist - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_pick_nearest_prefers_closer() {
        let ray = Ray {
            origin: Vec3::new(-5.0, 0.0, 0.0),
            direction: Vec3::X,
        };
        let boxes = vec![("far", unit_box_at(2.0)), ("near", unit_box_at(0.0))];
        assert_eq!(pick_nearest(&ray, boxes), Some("near"));
    }

    #[test]
    fn test_pick_nearest_none() {
        let ray = Ray {
            origin: Vec3::new(0.0, 5.0, 0.0),
            direction: Vec3::Y,
        };
        assert_eq!(pick_nearest(&ray, vec![(1u32, unit_box_at(0.0))]), None);
    }

    #[test]
    fn test_aabb_from_half_extents() {
        let b = Aabb::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(b.min, Vec3::new(0.5, 1.75, 2.0));
        assert_eq!(b.max, Vec3::new(1.5, 2.25, 4.0));
    }
}
