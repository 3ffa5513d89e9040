//! Priority-preemptive execution context: one shared priority totem,
//! N concurrent routines, cooperative yield-by-polling.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod gate;
pub mod routine;

pub use config::ExecConfig;
pub use context::ExecutionContext;
pub use dispatcher::Dispatcher;
pub use error::ExecError;
pub use gate::CommandGate;
pub use routine::{Gate, RoutineHandle};
