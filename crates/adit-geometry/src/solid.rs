//! Solid shapes and their axis-aligned bounds.

use std::fmt;

/// Shape primitive for a volume, dimensions in mm.
///
/// Two primitives cover the apparatus: rectangular boxes for the cavern
/// and lab shell, z-axis cylinders for the vessel, target, and PMT stack.
/// Both are described by half-dimensions, matching the convention of the
/// transport engine this tree is handed to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solid {
    /// Rectangular box with the given half-extents.
    Box {
        /// Half-extent along x.
        hx: f64,
        /// Half-extent along y.
        hy: f64,
        /// Half-extent along z.
        hz: f64,
    },
    /// Cylinder (or tube, when `rmin > 0`) along the z axis.
    Cylinder {
        /// Inner radius; `0.0` for a full cylinder.
        rmin: f64,
        /// Outer radius.
        rmax: f64,
        /// Half-height along z.
        hz: f64,
    },
}

impl Solid {
    /// Axis-aligned bounding box in the solid's own frame.
    pub fn aabb(&self) -> Aabb {
        match *self {
            Self::Box { hx, hy, hz } => Aabb {
                min: [-hx, -hy, -hz],
                max: [hx, hy, hz],
            },
            Self::Cylinder { rmax, hz, .. } => Aabb {
                min: [-rmax, -rmax, -hz],
                max: [rmax, rmax, hz],
            },
        }
    }

    /// Check the dimensions are positive and consistent.
    ///
    /// Returns a description of the problem if not.
    pub fn check_dimensions(&self) -> Result<(), String> {
        match *self {
            Self::Box { hx, hy, hz } => {
                if hx <= 0.0 || hy <= 0.0 || hz <= 0.0 {
                    return Err(format!("box half-extents must be positive ({hx}, {hy}, {hz})"));
                }
            }
            Self::Cylinder { rmin, rmax, hz } => {
                if rmax <= 0.0 || hz <= 0.0 {
                    return Err(format!("cylinder rmax and hz must be positive ({rmax}, {hz})"));
                }
                if rmin < 0.0 || rmin >= rmax {
                    return Err(format!("cylinder rmin {rmin} must lie in [0, rmax)"));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Box { hx, hy, hz } => write!(f, "box({hx} x {hy} x {hz})"),
            Self::Cylinder { rmin, rmax, hz } => write!(f, "cyl({rmin}..{rmax} x {hz})"),
        }
    }
}

/// Axis-aligned bounding box, used for containment and overlap checks.
///
/// Conservative for cylinders (the box of the cylinder), which is the
/// right bias for construction-time validation: a pair flagged as
/// overlapping may in truth clear each other, but a pair passed as
/// disjoint really is disjoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
}

impl Aabb {
    /// This box translated by `offset`.
    pub fn translated(&self, offset: [f64; 3]) -> Aabb {
        Aabb {
            min: [
                self.min[0] + offset[0],
                self.min[1] + offset[1],
                self.min[2] + offset[2],
            ],
            max: [
                self.max[0] + offset[0],
                self.max[1] + offset[1],
                self.max[2] + offset[2],
            ],
        }
    }

    /// Whether `other` lies entirely inside this box (boundaries allowed).
    pub fn contains(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.min[i] && other.max[i] <= self.max[i])
    }

    /// Whether the interiors of the two boxes intersect.
    ///
    /// Touching faces do not count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] < other.max[i] && other.min[i] < self.max[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Solid {
        Solid::Box {
            hx: 1.0,
            hy: 1.0,
            hz: 1.0,
        }
    }

    #[test]
    fn cylinder_aabb_is_its_bounding_box() {
        let c = Solid::Cylinder {
            rmin: 0.0,
            rmax: 2.0,
            hz: 5.0,
        };
        assert_eq!(
            c.aabb(),
            Aabb {
                min: [-2.0, -2.0, -5.0],
                max: [2.0, 2.0, 5.0],
            }
        );
    }

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = unit_box().aabb();
        let b = unit_box().aabb().translated([2.0, 0.0, 0.0]);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&unit_box().aabb().translated([1.9, 0.0, 0.0])));
    }

    #[test]
    fn containment_allows_shared_boundary() {
        let outer = unit_box().aabb();
        let inner = Solid::Box {
            hx: 1.0,
            hy: 0.5,
            hz: 0.5,
        }
        .aabb();
        assert!(outer.contains(&inner));
        assert!(!outer.contains(&inner.translated([0.1, 0.0, 0.0])));
    }

    #[test]
    fn degenerate_dimensions_are_caught() {
        assert!(Solid::Box {
            hx: 0.0,
            hy: 1.0,
            hz: 1.0
        }
        .check_dimensions()
        .is_err());
        assert!(Solid::Cylinder {
            rmin: 2.0,
            rmax: 2.0,
            hz: 1.0
        }
        .check_dimensions()
        .is_err());
        assert!(unit_box().check_dimensions().is_ok());
    }
}
