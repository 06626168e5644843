//! Input file pairing
//!
//! A project is a pair `name.ics_list` + `name.icprj`. Either file may be
//! given on the command line; the other path is derived from the stem.

use std::path::{Path, PathBuf};

use crate::error::PathError;

pub const PROJECT_EXTENSION: &str = "icprj";
pub const ICS_LIST_EXTENSION: &str = "ics_list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub ics_list: PathBuf,
    pub project: PathBuf,
    /// Placements are only loaded when the project file itself was given.
    pub read_project: bool,
}

impl ProjectPaths {
    pub fn from_input(input: &Path) -> Result<Self, PathError> {
        let extension = input
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| PathError::MissingExtension(input.to_path_buf()))?;

        match extension {
            PROJECT_EXTENSION => Ok(Self {
                ics_list: input.with_extension(ICS_LIST_EXTENSION),
                project: input.to_path_buf(),
                read_project: true,
            }),
            ICS_LIST_EXTENSION => Ok(Self {
                ics_list: input.to_path_buf(),
                project: input.with_extension(PROJECT_EXTENSION),
                read_project: false,
            }),
            _ => Err(PathError::UnknownExtension(input.to_path_buf())),
        }
    }
}
