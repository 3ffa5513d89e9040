//! Grid navigation: collision graph building, A* pathfinding, and
//! adjacent-level stitching.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod pathfinder;
pub mod world;

pub use config::NavConfig;
pub use error::NavError;
pub use grid::{CollisionGrid, GraphKey, TileKind, WorldGraph};
pub use path::TilePath;
pub use pathfinder::PathFinder;
pub use world::{GameData, MapData};
