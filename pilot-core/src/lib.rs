//! Engine-agnostic agent-pilot primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod area;
pub mod position;
pub mod priority;
pub mod room;

pub use area::{AreaId, MapSeed};
pub use position::Position;
pub use priority::PriorityLevel;
pub use room::Room;
