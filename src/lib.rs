//! Breadboard IC placement editor (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `bread_placer::{core,engine,format,input,term,types}`
//! and holds the binary's startup plumbing (logging and configuration).

pub mod config;
pub mod logging;

pub use bread_placer_core as core;
pub use bread_placer_engine as engine;
pub use bread_placer_format as format;
pub use bread_placer_input as input;
pub use bread_placer_term as term;
pub use bread_placer_types as types;

pub use config::{resolve_policy, COLLISION_ENV};
pub use logging::{init_logging, LOG_PATH_ENV};
