use crate::collision::Contact;

/// A pair of bodies, by index into the body slice, resolved during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPair {
    /// Index of the first body, always lower than `body_b`
    pub body_a: usize,

    /// Index of the second body
    pub body_b: usize,

    /// The contact found before the pair was separated
    pub contact: Contact,
}

impl CollisionPair {
    /// Checks if this collision pair contains the specified body
    pub fn contains(&self, body: usize) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Returns the other body in the pair
    pub fn other(&self, body: usize) -> Option<usize> {
        if self.body_a == body {
            Some(self.body_b)
        } else if self.body_b == body {
            Some(self.body_a)
        } else {
            None
        }
    }
}

/// Every unordered index pair `(i, j)` with `i < j < count`, in ascending
/// order of `i` then `j`.
pub fn ordered_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
}

/// Borrows two distinct elements of a slice mutably
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j, "pair indices must be ascending");
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
