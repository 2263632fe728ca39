//! The [`Volume`] tree.

use adit_core::GeometryError;

use crate::limits::StepLimits;
use crate::solid::{Aabb, Solid};

/// One node of the hierarchical geometric model.
///
/// A volume owns its children, giving the tree exactly-one-parent and
/// acyclicity for free. Placement is a translation relative to the parent
/// centre; the apparatus needs no rotations. Materials are referenced by
/// catalog name, never owned.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume {
    /// Unique name within the tree; the root is `"world"`.
    pub name: String,
    /// Shape of this volume.
    pub solid: Solid,
    /// Translation of this volume's centre relative to its parent (mm).
    pub placement: [f64; 3],
    /// Catalog name of the material filling this volume.
    pub material: String,
    /// Optional tracking limits applied inside this volume.
    pub limits: Option<StepLimits>,
    /// Daughter volumes, placed relative to this one.
    pub children: Vec<Volume>,
}

impl Volume {
    /// Build a childless volume with no limits.
    pub fn new(name: &str, solid: Solid, placement: [f64; 3], material: &str) -> Self {
        Self {
            name: name.to_owned(),
            solid,
            placement,
            material: material.to_owned(),
            limits: None,
            children: Vec::new(),
        }
    }

    /// Attach tracking limits. Builder-style.
    pub fn with_limits(mut self, limits: StepLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Add a daughter volume. Builder-style.
    pub fn with_child(mut self, child: Volume) -> Self {
        self.children.push(child);
        self
    }

    /// Find a volume by name anywhere in this subtree.
    pub fn find(&self, name: &str) -> Option<&Volume> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Visit every volume in the subtree, depth-first, parents first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Volume)) {
        visit(self);
        for c in &self.children {
            c.walk(visit);
        }
    }

    /// Total number of volumes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Volume::node_count).sum::<usize>()
    }

    /// Structural validation of the whole subtree.
    ///
    /// Checks, fatally: solids have sane dimensions, every child's bounds
    /// fit inside its parent, no two siblings overlap, and no name is
    /// used twice. Material existence is the builder's check, since only
    /// it holds the catalog. Sibling overlap uses conservative AABBs, so
    /// a rejected tree is genuinely broken or too tight to verify; an
    /// accepted tree is guaranteed disjoint.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let mut seen = Vec::new();
        self.validate_inner(&mut seen)
    }

    fn validate_inner<'a>(&'a self, seen: &mut Vec<&'a str>) -> Result<(), GeometryError> {
        if seen.iter().any(|n| *n == self.name) {
            return Err(GeometryError::DuplicateVolume {
                name: self.name.clone(),
            });
        }
        seen.push(&self.name);

        self.solid
            .check_dimensions()
            .map_err(|reason| GeometryError::DegenerateSolid {
                volume: self.name.clone(),
                reason,
            })?;

        // Children are placed in the parent frame; the parent AABB is
        // centred at the origin of that frame.
        let parent_box = self.solid.aabb();
        let child_boxes: Vec<Aabb> = self
            .children
            .iter()
            .map(|c| c.solid.aabb().translated(c.placement))
            .collect();

        for (child, cbox) in self.children.iter().zip(&child_boxes) {
            if !parent_box.contains(cbox) {
                return Err(GeometryError::ChildOutsideParent {
                    child: child.name.clone(),
                    parent: self.name.clone(),
                });
            }
        }
        for i in 0..self.children.len() {
            for j in (i + 1)..self.children.len() {
                if child_boxes[i].intersects(&child_boxes[j]) {
                    return Err(GeometryError::OverlappingSiblings {
                        first: self.children[i].name.clone(),
                        second: self.children[j].name.clone(),
                    });
                }
            }
        }

        for c in &self.children {
            c.validate_inner(seen)?;
        }
        Ok(())
    }
}
