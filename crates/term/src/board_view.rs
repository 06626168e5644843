//! BoardView: maps a placement `Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: a row-number gutter, the three lanes separated by
//! rules, then a side panel with the selection state and the outside pool.
//! A status line sits under the board. When the viewport is shorter than the
//! board the visible row window follows the cursor.

use crate::core::{column_occupants, occupied_span, Ic, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Orientation, Pin, PinType, BOARD_COLUMNS, BOARD_ROWS, FIRST_ROW};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Text for the bottom status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusBar<'a> {
    pub project: &'a str,
    pub dirty: bool,
    pub message: Option<&'a str>,
}

const GUTTER_W: u16 = 3;
const LABEL_W: u16 = 7;
const BODY_W: u16 = 6;
/// Label, edge, body, edge, label.
const LANE_W: u16 = LABEL_W * 2 + BODY_W + 2;
const PANEL_W: u16 = 30;
const OFF_BOARD_MARK: char = '»';

const BOARD_BG: Rgb = Rgb::new(28, 30, 36);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const IC_BG: Rgb = Rgb::new(48, 48, 56);
const IC_ATTACHED_BG: Rgb = Rgb::new(70, 64, 30);

/// Renders the breadboard, the placed ICs and the side panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView;

impl BoardView {
    pub fn new() -> Self {
        Self
    }

    /// Outer width of the board frame including borders.
    pub const fn frame_width() -> u16 {
        2 + GUTTER_W + (LANE_W + 1) * BOARD_COLUMNS as u16
    }

    /// First board row shown when `visible` rows fit around `cursor_row`.
    pub fn first_visible_row(cursor_row: i16, visible: i16) -> i16 {
        if visible >= BOARD_ROWS {
            return FIRST_ROW;
        }
        let last_start = BOARD_ROWS - visible + 1;
        (cursor_row - visible / 2).clamp(FIRST_ROW, last_start)
    }

    /// Render the session into a framebuffer of the viewport's size.
    pub fn render(&self, session: &Session, status: StatusBar<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).into_cell(' '));

        let visible = (viewport.height.saturating_sub(3).min(BOARD_ROWS as u16) as i16).max(1);
        let first_row = Self::first_visible_row(session.selection().row(), visible);

        let frame_w = Self::frame_width();
        let frame_h = visible as u16 + 2;
        let total_w = frame_w + 2 + PANEL_W;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = 0;

        let board = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        let geometry = Frame {
            x: start_x,
            y: start_y,
            first_row,
            last_row: first_row + visible - 1,
        };

        for row in geometry.first_row..=geometry.last_row {
            let y = geometry.row_y(row);
            fb.put_str(start_x + 1, y, &format!("{row:>2} "), board.dim());
            for column in 1..=BOARD_COLUMNS {
                fb.put_char(geometry.lane_x(column) - 1, y, '│', board);
                self.draw_empty_lane_row(&mut fb, geometry.lane_x(column), y);
            }
        }

        for column in 1..=BOARD_COLUMNS {
            for id in column_occupants(session.ics(), column) {
                if let Some(ic) = session.ic(id) {
                    let attached = session.selection().attached() == Some(id);
                    self.draw_ic(&mut fb, &geometry, column, ic, attached);
                }
            }
        }

        self.draw_cursor(&mut fb, &geometry, session);
        self.draw_side_panel(&mut fb, session, viewport, start_x + frame_w + 2);
        self.draw_status(&mut fb, viewport, status);

        fb
    }

    fn draw_empty_lane_row(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let hole = CellStyle::new(Rgb::new(80, 80, 92), BOARD_BG).dim();
        for dx in (1..LANE_W).step_by(2) {
            fb.put_char(x + dx, y, '·', hole);
        }
    }

    fn draw_ic(&self, fb: &mut FrameBuffer, frame: &Frame, column: u8, ic: &Ic, attached: bool) {
        let span = occupied_span(ic);
        let half = ic.row_count();
        let n = ic.n_pins() as u16;
        let orientation = ic.location.orientation;

        let bg = if attached { IC_ATTACHED_BG } else { IC_BG };
        let mut body = CellStyle::new(Rgb::new(230, 230, 230), bg);
        if attached {
            body = body.bold();
        }

        let (notch_row, notch) = match orientation {
            Orientation::Up => (span.min, "──◡───"),
            Orientation::Down => (span.max, "──◠───"),
        };
        let name_row = match orientation {
            Orientation::Up => span.min + half / 2,
            Orientation::Down => span.max - half / 2,
        };

        let x = frame.lane_x(column);
        for row in span.rows() {
            if row < frame.first_row || row > frame.last_row {
                continue;
            }
            let y = frame.row_y(row);

            // Offset from the pin-1 end of the package.
            let offset = match orientation {
                Orientation::Up => row - span.min,
                Orientation::Down => span.max - row,
            };
            let k = offset as u16;
            let near = k + 1;
            let far = n - k;
            let (left, right) = match orientation {
                Orientation::Up => (near, far),
                Orientation::Down => (far, near),
            };

            if let Some(pin) = ic.pin(left) {
                fb.put_field(x, y, LABEL_W, &pin_text(pin), pin_style(pin, bg));
            }
            fb.put_char(x + LABEL_W, y, '┃', body);

            let text = if row == name_row && (row != notch_row || half == 1) {
                centered(ic.display_name(), BODY_W as usize)
            } else if row == notch_row {
                notch.to_owned()
            } else {
                String::new()
            };
            fb.put_field(x + LABEL_W + 1, y, BODY_W, &text, body);

            fb.put_char(x + LABEL_W + 1 + BODY_W, y, '┃', body);
            if let Some(pin) = ic.pin(right) {
                let label = pin_text(pin);
                let width = label.chars().count().min(LABEL_W as usize) as u16;
                let field_x = x + LABEL_W + 2 + BODY_W;
                fb.put_field(field_x, y, LABEL_W, "", pin_style(pin, bg));
                fb.put_field(field_x + LABEL_W - width, y, width, &label, pin_style(pin, bg));
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, frame: &Frame, session: &Session) {
        let sel = session.selection();
        if sel.row() < frame.first_row || sel.row() > frame.last_row {
            return;
        }
        let x = frame.lane_x(sel.column());
        let y = frame.row_y(sel.row());
        for dx in 0..LANE_W {
            if let Some(mut cell) = fb.get(x + dx, y) {
                cell.style = cell.style.reversed();
                fb.set(x + dx, y, cell);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &Session, viewport: Viewport, panel_x: u16) {
        if panel_x >= viewport.width || viewport.width - panel_x < 16 {
            return;
        }
        let panel_w = (viewport.width - panel_x).min(PANEL_W);

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let sel = session.selection();

        let mut y = 0u16;
        let mut line = |fb: &mut FrameBuffer, text: &str, style: CellStyle| {
            if y + 1 < viewport.height {
                fb.put_field(panel_x, y, panel_w, text, style);
            }
            y = y.saturating_add(1);
        };

        line(fb, "BREAD PLACER", label);
        line(fb, "", value);
        line(fb, "STATE", label);
        line(fb, sel.state().as_str(), value);
        line(fb, "CURSOR", label);
        line(fb, &format!("column {} row {}", sel.column(), sel.row()), value);
        line(fb, "ATTACHED", label);
        match sel.attached().and_then(|id| session.ic(id)) {
            Some(ic) => {
                line(fb, ic.display_name(), value);
                line(fb, &power_summary(ic), value.dim());
            }
            None => line(fb, "-", value),
        }
        line(fb, "", value);

        line(fb, &format!("OUTSIDE ({})", session.count_outside()), label);
        let pick = session.pool_pick();
        for (id, ic) in session.outside_ics() {
            let style = if Some(id) == pick { value.reversed() } else { value };
            line(fb, &format!("{} {} ({}p)", id, ic.display_name(), ic.n_pins()), style);
        }
        line(fb, "", value);

        line(fb, "KEYS", label);
        for help in [
            "arrows/hjkl  move",
            "space  attach/release",
            "r  rotate",
            "o  put outside",
            "i  bring inside",
            "[ ]  pick outside IC",
            "s  save   q  quit",
        ] {
            line(fb, help, value.dim());
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, viewport: Viewport, status: StatusBar<'_>) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - 1;
        let style = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(180, 180, 180));
        let mut text = format!(" {}{}", status.project, if status.dirty { " [+]" } else { "" });
        if let Some(message) = status.message {
            text.push_str("  ");
            text.push_str(message);
        }
        fb.put_field(0, y, viewport.width, &text, style);
    }
}

/// Board frame placement and the visible row window.
struct Frame {
    x: u16,
    y: u16,
    first_row: i16,
    last_row: i16,
}

impl Frame {
    fn lane_x(&self, column: u8) -> u16 {
        self.x + 1 + GUTTER_W + (column as u16 - 1) * (LANE_W + 1) + 1
    }

    fn row_y(&self, row: i16) -> u16 {
        self.y + 1 + (row - self.first_row) as u16
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn pin_text(pin: &Pin) -> String {
    if pin.goes_outside {
        format!("{OFF_BOARD_MARK}{}", pin.label)
    } else {
        pin.label.clone()
    }
}

fn pin_style(pin: &Pin, bg: Rgb) -> CellStyle {
    let style = match pin.kind {
        PinType::Vcc => CellStyle::new(Rgb::new(235, 90, 80), bg).bold(),
        PinType::Gnd => CellStyle::new(Rgb::new(110, 150, 240), bg).bold(),
        PinType::NotConnected => CellStyle::new(Rgb::new(130, 130, 130), bg).dim(),
        PinType::NonSpecial => CellStyle::new(Rgb::new(210, 210, 210), bg),
    };
    style.on(bg)
}

/// Supply pins of `ic`, e.g. `VCC 16  GND 8`.
fn power_summary(ic: &Ic) -> String {
    let pins: Vec<String> = ic
        .power_pins()
        .map(|pin| format!("{} {}", pin.kind.as_str().to_uppercase(), pin.number))
        .collect();
    if pins.is_empty() {
        "no supply pins".to_owned()
    } else {
        pins.join("  ")
    }
}

fn centered(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let pad = (width - text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
