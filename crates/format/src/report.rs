//! JSON placement report
//!
//! A read-only dump of the session for scripts and diffing, emitted by the
//! binary's `--json` mode.

use serde::{Deserialize, Serialize};

use crate::core::{occupied_span, Session};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanReport {
    pub min: i16,
    pub max: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcReport {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub pins: usize,
    pub column: u8,
    pub row: i16,
    pub orientation: String,
    /// Rows covered, absent for outside ICs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SpanReport>,
    #[serde(rename = "off_board_pins")]
    pub off_board: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub ics: Vec<IcReport>,
    pub outside: usize,
    pub collision_policy: String,
    /// Index pairs that share rows in one lane.
    pub overlaps: Vec<(usize, usize)>,
}

impl PlacementReport {
    pub fn from_session(session: &Session) -> Self {
        let ics = session
            .ics()
            .iter()
            .enumerate()
            .map(|(index, ic)| {
                let loc = ic.location;
                let span = (!loc.is_outside()).then(|| {
                    let s = occupied_span(ic);
                    SpanReport {
                        min: s.min,
                        max: s.max,
                    }
                });
                IcReport {
                    index,
                    name: ic.name.clone(),
                    code: ic.code.clone(),
                    pins: ic.n_pins(),
                    column: loc.column,
                    row: loc.row,
                    orientation: loc.orientation.as_str().to_owned(),
                    span,
                    off_board: ic
                        .pins()
                        .iter()
                        .filter(|p| p.goes_outside)
                        .map(|p| p.number)
                        .collect(),
                }
            })
            .collect();

        Self {
            ics,
            outside: session.count_outside(),
            collision_policy: session.policy().as_str().to_owned(),
            overlaps: session
                .overlaps()
                .into_iter()
                .map(|(a, b)| (a.index(), b.index()))
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ic;
    use crate::types::{Location, Orientation};

    #[test]
    fn report_describes_placed_and_outside_ics() {
        let session = Session::new(vec![
            Ic::with_pin_count(8).at(Location::new(2, 10, Orientation::Down)),
            Ic::with_pin_count(14),
        ]);
        let report = PlacementReport::from_session(&session);

        assert_eq!(report.outside, 1);
        assert_eq!(report.collision_policy, "interval");
        assert_eq!(report.ics[0].span, Some(SpanReport { min: 7, max: 10 }));
        assert_eq!(report.ics[0].orientation, "down");
        assert_eq!(report.ics[1].span, None);
        assert!(report.overlaps.is_empty());

        let json = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ics"][0]["column"], 2);
        assert!(value["ics"][1].get("span").is_none());
    }
}
