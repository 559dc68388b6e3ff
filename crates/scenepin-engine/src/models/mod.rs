pub mod anchor;
pub mod shot;

pub use anchor::{BlockAnchor, DocumentId};
pub use shot::{Shot, ShotId};
