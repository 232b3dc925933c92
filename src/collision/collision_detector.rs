use crate::bodies::RigidBody;
use crate::collision::Contact;
use crate::math::{Aabb, Axis};

/// Returns true if the two bodies' rectangles overlap.
///
/// Rectangles overlap only if their interiors intersect on both axes at the
/// same time; rectangles that share an edge are not overlapping.
pub fn overlaps(a: &RigidBody, b: &RigidBody) -> bool {
    a.get_bounds().intersects(&b.get_bounds())
}

/// Returns the contact between two overlapping bodies, or `None` if they
/// do not overlap.
pub fn contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    if !overlaps(a, b) {
        return None;
    }

    Some(contact_geometry(a, b))
}

/// Computes the axis of least penetration and the normal from `a` to `b`
/// without requiring the bodies to overlap.
///
/// For a pair that was just separated the touching axis has zero overlap,
/// so it is still reported as the collision axis.
pub fn contact_geometry(a: &RigidBody, b: &RigidBody) -> Contact {
    aabb_contact(&a.get_bounds(), &b.get_bounds())
}

/// Contact geometry between two boxes. Ties between the axes pick X.
pub fn aabb_contact(a: &Aabb, b: &Aabb) -> Contact {
    let overlap_x = a.overlap_on(b, Axis::X);
    let overlap_y = a.overlap_on(b, Axis::Y);

    let (axis, penetration) = if overlap_x <= overlap_y {
        (Axis::X, overlap_x)
    } else {
        (Axis::Y, overlap_y)
    };

    let center_a = a.center().component(axis);
    let center_b = b.center().component(axis);
    let normal = if center_b >= center_a {
        axis.unit()
    } else {
        -axis.unit()
    };

    Contact {
        axis,
        normal,
        penetration,
    }
}
