mod contact;
mod collision_pair;
pub mod collision_detector;
pub mod contact_solver;
pub mod boundary;

pub use self::contact::Contact;
pub use self::collision_pair::{CollisionPair, ordered_pairs};
pub(crate) use self::collision_pair::pair_mut;
pub use self::collision_detector::{overlaps, contact, contact_geometry};
pub use self::contact_solver::{prevent_overlap, resolve_bounce, apply_bounce};
pub use self::boundary::{reflect, WorldBounds};
