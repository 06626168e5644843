//! `.icprj` reader and writer
//!
//! One line per IC: `<index>: {<column>, <row>, <orientation>}`, orientation
//! 0 for up and 1 for down. Loaded placements are trusted: they are written
//! straight into the session without collision checks.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::{Ic, Session};
use crate::error::ProjectError;
use crate::types::{IcId, Location, Orientation, BOARD_COLUMNS, BOARD_ROWS, OUTSIDE_COLUMN};

/// Summary of a project load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLoad {
    /// Placements written into the session.
    pub applied: usize,
    /// 1-based numbers of lines that were not placement records.
    pub skipped_lines: Vec<usize>,
}

/// Render the project file for `ics`.
pub fn format_project(ics: &[Ic]) -> String {
    let mut out = String::with_capacity(ics.len() * 16);
    for (index, ic) in ics.iter().enumerate() {
        let loc = ic.location;
        let _ = writeln!(
            out,
            "{index}: {{{}, {}, {}}}",
            loc.column,
            loc.row,
            loc.orientation.code()
        );
    }
    out
}

pub fn write_project<W: Write>(ics: &[Ic], mut out: W) -> io::Result<()> {
    out.write_all(format_project(ics).as_bytes())?;
    out.flush()
}

pub fn save_project_file(path: &Path, ics: &[Ic]) -> Result<(), ProjectError> {
    let file = fs::File::create(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_project(ics, io::BufWriter::new(file)).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saved {} placements to {}", ics.len(), path.display());
    Ok(())
}

/// Apply the placements in `input` to `session`.
///
/// Lines that do not look like placement records are skipped with a warning.
/// A record naming an unknown IC or an impossible location is an error; the
/// records before it stay applied.
pub fn parse_project(input: &str, session: &mut Session) -> Result<ProjectLoad, ProjectError> {
    let mut load = ProjectLoad::default();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim_end();
        let Some(record) = Record::parse(text) else {
            log::warn!("invalid line in project file, ignoring. {line}: {text}");
            load.skipped_lines.push(line);
            continue;
        };

        let count = session.ics().len();
        if record.index >= count {
            return Err(ProjectError::InvalidIndex {
                line,
                index: record.index,
                count,
            });
        }
        let location = record.location(line)?;
        session.set_location(IcId(record.index), location);
        load.applied += 1;
    }

    for (a, b) in session.overlaps() {
        log::warn!("project places {a} and {b} on overlapping rows");
    }
    Ok(load)
}

pub fn load_project_file(path: &Path, session: &mut Session) -> Result<ProjectLoad, ProjectError> {
    let text = fs::read_to_string(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let load = parse_project(&text, session)?;
    log::info!(
        "loaded {} placements from {} ({} lines skipped)",
        load.applied,
        path.display(),
        load.skipped_lines.len()
    );
    Ok(load)
}

struct Record {
    index: usize,
    column: u32,
    row: i64,
    orientation: u32,
}

impl Record {
    fn parse(text: &str) -> Option<Self> {
        let (index, rest) = text.split_once(':')?;
        let body = rest.trim().strip_prefix('{')?;
        let body = body.split_once('}')?.0;

        let mut fields = body.split(',').map(str::trim);
        let column = fields.next()?.parse().ok()?;
        let row = fields.next()?.parse().ok()?;
        let orientation = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            index: index.trim().parse().ok()?,
            column,
            row,
            orientation,
        })
    }

    fn location(&self, line: usize) -> Result<Location, ProjectError> {
        if self.column > BOARD_COLUMNS as u32 {
            return Err(ProjectError::InvalidColumn {
                line,
                column: self.column,
            });
        }
        let orientation = u8::try_from(self.orientation)
            .ok()
            .and_then(Orientation::from_code)
            .ok_or(ProjectError::InvalidOrientation {
                line,
                code: self.orientation,
            })?;
        // Outside ICs keep whatever anchor rotation left them with.
        let valid = if self.column == OUTSIDE_COLUMN as u32 {
            i16::try_from(self.row).is_ok()
        } else {
            (0..=BOARD_ROWS as i64).contains(&self.row)
        };
        if !valid {
            return Err(ProjectError::InvalidRow {
                line,
                row: self.row,
            });
        }
        Ok(Location::new(self.column as u8, self.row as i16, orientation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(vec![
            Ic::with_pin_count(8),
            Ic::with_pin_count(14),
            Ic::with_pin_count(16),
        ])
    }

    #[test]
    fn format_lists_every_ic_in_order() {
        let mut s = session();
        s.set_location(IcId(0), Location::new(1, 10, Orientation::Up));
        s.set_location(IcId(1), Location::new(3, 64, Orientation::Down));
        assert_eq!(
            format_project(s.ics()),
            "0: {1, 10, 0}\n1: {3, 64, 1}\n2: {0, 0, 0}\n"
        );
    }

    #[test]
    fn parse_applies_records_and_skips_noise() {
        let mut s = session();
        let load = parse_project("# header\n1: {2, 5, 1}\n\n0:{1,1,0}\n", &mut s).unwrap();
        assert_eq!(load.applied, 2);
        assert_eq!(load.skipped_lines, vec![1, 3]);
        assert_eq!(s.ics()[1].location, Location::new(2, 5, Orientation::Down));
        assert_eq!(s.ics()[0].location, Location::new(1, 1, Orientation::Up));
        assert!(s.ics()[2].location.is_outside());
    }

    #[test]
    fn saved_text_loads_back() {
        let mut s = session();
        s.set_location(IcId(2), Location::new(2, 30, Orientation::Down));
        let text = format_project(s.ics());

        let mut fresh = session();
        parse_project(&text, &mut fresh).unwrap();
        assert_eq!(fresh.ics(), s.ics());
    }

    #[test]
    fn rotated_outside_ic_survives_save_and_load() {
        let mut s = Session::new(vec![Ic::with_pin_count(140), Ic::with_pin_count(8)]);
        assert!(s.rotate(IcId(0)));
        assert_eq!(s.ics()[0].location, Location::new(0, 69, Orientation::Down));
        let text = format_project(s.ics());

        let mut fresh = Session::new(vec![Ic::with_pin_count(140), Ic::with_pin_count(8)]);
        parse_project(&text, &mut fresh).unwrap();
        assert_eq!(fresh.ics(), s.ics());
    }

    #[test]
    fn board_rows_are_still_bounded() {
        let mut s = session();
        let err = parse_project("0: {1, 65, 0}
", &mut s).unwrap_err();
        assert!(matches!(err, ProjectError::InvalidRow { row: 65, .. }));

        let err = parse_project("0: {0, 40000, 0}
", &mut s).unwrap_err();
        assert!(matches!(err, ProjectError::InvalidRow { row: 40000, .. }));
        parse_project("0: {0, 300, 1}
", &mut s).unwrap();
        assert_eq!(s.ics()[0].location, Location::new(0, 300, Orientation::Down));
    }

    #[test]
    fn index_past_list_is_an_error() {
        let mut s = session();
        let err = parse_project("0: {1, 1, 0}\n3: {1, 20, 0}\n", &mut s).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::InvalidIndex {
                line: 2,
                index: 3,
                count: 3
            }
        ));
        // Earlier records stay applied.
        assert_eq!(s.ics()[0].location.column, 1);
    }

    #[test]
    fn bad_column_and_orientation_are_errors() {
        let mut s = session();
        assert!(matches!(
            parse_project("0: {4, 1, 0}\n", &mut s),
            Err(ProjectError::InvalidColumn { column: 4, .. })
        ));
        assert!(matches!(
            parse_project("0: {1, 1, 2}\n", &mut s),
            Err(ProjectError::InvalidOrientation { code: 2, .. })
        ));
        assert!(matches!(
            parse_project("0: {1, 65, 0}\n", &mut s),
            Err(ProjectError::InvalidRow { row: 65, .. })
        ));
    }

    #[test]
    fn overlapping_records_are_trusted() {
        let mut s = session();
        parse_project("0: {1, 1, 0}\n1: {1, 2, 0}\n", &mut s).unwrap();
        assert_eq!(s.overlaps(), vec![(IcId(0), IcId(1))]);
    }
}
