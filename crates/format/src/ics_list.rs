//! `.ics_list` reader
//!
//! Line oriented; trailing whitespace is ignored. A block opens with
//! `IC <pins>` and closes at the next blank line or end of input. Inside a
//! block `Name` and `Code` lines set metadata and `Pins` switches to pin
//! lines of the form `#<number> <label>`. A label starting with `>` marks a
//! lead routed off the board.

use std::fs;
use std::path::Path;

use crate::core::Ic;
use crate::error::IcListError;
use crate::types::Pin;

const OFF_BOARD_MARKER: char = '>';

/// Parse every IC block in `input`, in file order.
pub fn parse_ic_list(input: &str) -> Result<Vec<Ic>, IcListError> {
    let mut ics = Vec::new();
    let mut current: Option<IcBuilder> = None;
    let mut last_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let line = raw.trim_end();

        let Some(builder) = current.as_mut() else {
            if line.starts_with("IC") {
                current = Some(IcBuilder::open(line, line_no)?);
            }
            continue;
        };

        if line.is_empty() {
            if let Some(done) = current.take() {
                ics.push(done.finish(line_no)?);
            }
            continue;
        }

        if builder.reading_pins {
            builder.assign(line, line_no)?;
        } else if line.starts_with("Name") {
            builder.name = Some(after_first_space(line).to_owned());
        } else if line.starts_with("Code") {
            builder.code = Some(after_first_space(line).to_owned());
        } else if line.starts_with("Pins") {
            builder.reading_pins = true;
        }
    }

    if let Some(done) = current.take() {
        ics.push(done.finish(last_line)?);
    }

    log::debug!("parsed {} ICs", ics.len());
    Ok(ics)
}

/// Read and parse an `.ics_list` file.
pub fn read_ic_list(path: &Path) -> Result<Vec<Ic>, IcListError> {
    let text = fs::read_to_string(path).map_err(|source| IcListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ic_list(&text)
}

struct IcBuilder {
    name: Option<String>,
    code: Option<String>,
    pins: Vec<Option<Pin>>,
    reading_pins: bool,
}

impl IcBuilder {
    fn open(line: &str, line_no: usize) -> Result<Self, IcListError> {
        let count_text = after_first_space(line).trim();
        let count: usize = count_text
            .parse()
            .map_err(|_| IcListError::InvalidPinCount {
                line: line_no,
                text: line.to_owned(),
            })?;
        if count == 0 || count % 2 != 0 || count > u16::MAX as usize {
            return Err(IcListError::OddPinCount {
                line: line_no,
                count,
            });
        }
        Ok(Self {
            name: None,
            code: None,
            pins: vec![None; count],
            reading_pins: false,
        })
    }

    fn ident(&self) -> String {
        self.code
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "<unnamed>".to_owned())
    }

    fn assign(&mut self, line: &str, line_no: usize) -> Result<(), IcListError> {
        let Some(rest) = line.strip_prefix('#') else {
            return Err(IcListError::ExpectedPinLine { line: line_no });
        };

        let digits: String = rest
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let number: usize = digits
            .parse()
            .map_err(|_| IcListError::MissingPinNumber {
                line: line_no,
                text: line.to_owned(),
            })?;

        let mut label = after_first_space(rest);
        let goes_outside = label.starts_with(OFF_BOARD_MARKER);
        if goes_outside {
            label = label[OFF_BOARD_MARKER.len_utf8()..].trim_start();
        }
        if label.is_empty() {
            return Err(IcListError::EmptyLabel {
                line: line_no,
                pin: number,
            });
        }

        let count = self.pins.len();
        let ident = self.ident();
        let Some(slot) = number.checked_sub(1).and_then(|i| self.pins.get_mut(i)) else {
            return Err(IcListError::PinOutOfRange {
                line: line_no,
                ic: ident,
                count,
                pin: number,
            });
        };
        if slot.is_some() {
            return Err(IcListError::PinAlreadyAssigned {
                line: line_no,
                ic: ident,
                pin: number,
            });
        }

        *slot = Some(Pin::new(number as u16, label, goes_outside));
        Ok(())
    }

    fn finish(self, line_no: usize) -> Result<Ic, IcListError> {
        let missing: Vec<usize> = self
            .pins
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_none())
            .map(|(i, _)| i + 1)
            .collect();
        if !missing.is_empty() {
            return Err(IcListError::UnassignedPins {
                line: line_no,
                ic: self.ident(),
                missing,
            });
        }

        let pins = self.pins.into_iter().flatten().collect();
        Ok(Ic::new(self.name, self.code, pins))
    }
}

/// Text after the first space, or the empty string when there is none.
fn after_first_space(line: &str) -> &str {
    match line.find(' ') {
        Some(i) => &line[i + 1..],
        None => "",
    }
}
