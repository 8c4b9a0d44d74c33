//! PanelView: maps the LCD mirror into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::panel::LcdPanel;
use crate::types::{Phase, HEIGHT, LIFE_INDICATORS, WIDTH};

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

/// Text shown under the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub phase: Phase,
    pub score: u32,
    pub tick_period_ms: u32,
    /// Latest diagnostic line, if any.
    pub message: &'a str,
}

const PANEL_COLS: u16 = WIDTH as u16;
// Two pixel rows per terminal row.
const PANEL_ROWS: u16 = (HEIGHT / 2) as u16;
const FRAME_W: u16 = PANEL_COLS + 2;
const FRAME_H: u16 = PANEL_ROWS + 2;
/// Frame plus the LED, status and help rows.
const BLOCK_H: u16 = FRAME_H + 3;

const HELP: &str = "space: jump/confirm  left/right: dial  1-4: lives  q: quit";

/// Renders the panel with half-block characters.
pub struct PanelView {
    lit: CellStyle,
    border: CellStyle,
    led_on: CellStyle,
    led_off: CellStyle,
    text: CellStyle,
}

impl Default for PanelView {
    fn default() -> Self {
        // Yellow-green backlit STN look.
        let glass = Rgb::new(150, 170, 60);
        Self {
            lit: CellStyle::new(Rgb::new(20, 30, 10), glass),
            border: CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
            led_on: CellStyle::new(Rgb::new(255, 60, 40), Rgb::new(0, 0, 0)).bold(),
            led_off: CellStyle::new(Rgb::new(90, 40, 40), Rgb::new(0, 0, 0)).dim(),
            text: CellStyle::default(),
        }
    }
}

impl PanelView {
    /// Terminal size needed to show everything.
    pub const fn min_viewport() -> Viewport {
        Viewport {
            width: FRAME_W,
            height: BLOCK_H,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Smaller viewports clip the panel rather than scale it.
    pub fn render_into(
        &self,
        panel: &LcdPanel,
        leds: [bool; LIFE_INDICATORS],
        status: &StatusLine<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let x0 = viewport.width.saturating_sub(FRAME_W) / 2;
        let y0 = viewport.height.saturating_sub(BLOCK_H) / 2;

        self.draw_border(fb, x0, y0);

        for row in 0..PANEL_ROWS {
            let top = 2 * row as usize;
            for col in 0..PANEL_COLS {
                let ch = half_block(
                    panel.pixel(col as usize, top),
                    panel.pixel(col as usize, top + 1),
                );
                fb.put_char(x0 + 1 + col, y0 + 1 + row, ch, self.lit);
            }
        }

        let led_y = y0 + FRAME_H;
        fb.put_str(x0 + 1, led_y, "LIVES", self.text);
        for (i, &on) in leds.iter().enumerate() {
            let x = x0 + 7 + 2 * i as u16;
            if on {
                fb.put_char(x, led_y, '●', self.led_on);
            } else {
                fb.put_char(x, led_y, '○', self.led_off);
            }
        }

        let line = format!(
            "{:<9} score {:<6} tick {}ms  {}",
            status.phase.to_string().to_uppercase(),
            status.score,
            status.tick_period_ms,
            status.message
        );
        fb.put_str(x0 + 1, led_y + 1, &line, self.text);
        fb.put_str(x0 + 1, led_y + 2, HELP, self.text.dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        panel: &LcdPanel,
        leds: [bool; LIFE_INDICATORS],
        status: &StatusLine<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(panel, leds, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let right = x + FRAME_W - 1;
        let bottom = y + FRAME_H - 1;
        fb.put_char(x, y, '┌', self.border);
        fb.put_char(right, y, '┐', self.border);
        fb.put_char(x, bottom, '└', self.border);
        fb.put_char(right, bottom, '┘', self.border);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', self.border);
            fb.put_char(cx, bottom, '─', self.border);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', self.border);
            fb.put_char(right, cy, '│', self.border);
        }
    }
}

fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PageSink;

    fn status() -> StatusLine<'static> {
        StatusLine {
            phase: Phase::Running,
            score: 7,
            tick_period_ms: 20,
            message: "score: 7",
        }
    }

    fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
        fb.get(x, y).map(|c| c.ch).unwrap_or('?')
    }

    #[test]
    fn pixels_pair_into_half_blocks() {
        let mut panel = LcdPanel::new();
        let mut page = [0u8; WIDTH];
        page[0] = 0b01; // (0, 0)
        page[1] = 0b10; // (1, 1)
        page[2] = 0b11;
        panel.write_page(0, &page).unwrap();

        let fb = PanelView::default().render(&panel, [false; 4], &status(), PanelView::min_viewport());
        assert_eq!(ch(&fb, 1, 1), '▀');
        assert_eq!(ch(&fb, 2, 1), '▄');
        assert_eq!(ch(&fb, 3, 1), '█');
        assert_eq!(ch(&fb, 4, 1), ' ');
        assert_eq!(ch(&fb, 0, 0), '┌');
        assert_eq!(ch(&fb, FRAME_W - 1, FRAME_H - 1), '┘');
    }

    #[test]
    fn leds_are_thermometer_coded() {
        let fb = PanelView::default().render(
            &LcdPanel::new(),
            [true, true, false, false],
            &status(),
            PanelView::min_viewport(),
        );
        let y = FRAME_H;
        let leds: Vec<char> = (0..4).map(|i| ch(&fb, 7 + 2 * i, y)).collect();
        assert_eq!(leds, vec!['●', '●', '○', '○']);
    }

    #[test]
    fn status_line_shows_phase_and_score() {
        let fb = PanelView::default().render(
            &LcdPanel::new(),
            [false; 4],
            &status(),
            PanelView::min_viewport(),
        );
        let line: String = (0..FRAME_W).map(|x| ch(&fb, x, FRAME_H + 1)).collect();
        assert!(line.contains("RUNNING"));
        assert!(line.contains("score 7"));
    }

    #[test]
    fn small_viewport_clips_without_panicking() {
        let fb = PanelView::default().render(&LcdPanel::new(), [true; 4], &status(), Viewport::new(20, 5));
        assert_eq!((fb.width(), fb.height()), (20, 5));
        assert_eq!(ch(&fb, 0, 0), '┌');
    }
}
