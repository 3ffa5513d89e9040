#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for one loaded area (level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaId(pub u32);

/// Seed the current world layout was generated from.
///
/// Part of the graph cache key: a new seed means every area's collision
/// data is stale even when the area id repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapSeed(pub u64);
