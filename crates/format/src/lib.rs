//! File formats for breadboard projects.
//!
//! - [`ics_list`]: the `.ics_list` IC description format (read only)
//! - [`project`]: the `.icprj` placement file (read and write)
//! - [`paths`]: pairing of the two files from one command-line argument
//! - [`report`]: JSON placement report
//!
//! # IC list example
//!
//! ```text
//! IC 14
//! Name Quad 2-input NAND
//! Code 74HC00
//! Pins
//! #1 1A
//! #2 1B
//! ...
//! #14 VCC
//! ```
//!
//! # Project file example
//!
//! ```text
//! 0: {1, 10, 0}
//! 1: {0, 0, 0}
//! ```

pub mod error;
pub mod ics_list;
pub mod paths;
pub mod project;
pub mod report;

pub use bread_placer_core as core;
pub use bread_placer_types as types;

pub use error::{IcListError, PathError, ProjectError};
pub use ics_list::{parse_ic_list, read_ic_list};
pub use paths::ProjectPaths;
pub use project::{
    format_project, load_project_file, parse_project, save_project_file, write_project,
    ProjectLoad,
};
pub use report::PlacementReport;
