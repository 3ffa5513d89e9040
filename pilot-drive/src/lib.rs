//! Movement driver: consumes computed paths and emits paced, stride-bounded
//! movement commands through the priority command gate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod screen;
pub mod sink;

pub use config::DriveConfig;
pub use driver::{MovementDriver, MoveOutcome};
pub use error::DriveError;
pub use sink::CommandSink;
