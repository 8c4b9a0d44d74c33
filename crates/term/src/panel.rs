//! In-memory LCD: the page sink the game flushes into.

use std::convert::Infallible;

use crate::render::{DirtyPages, PageBytes, PageSink};
use crate::types::{HEIGHT, PAGES, WIDTH};

/// Mirror of the panel's display RAM.
#[derive(Debug, Clone)]
pub struct LcdPanel {
    ram: [PageBytes; PAGES],
    page_writes: u64,
    /// Pages written since the last [`take_touched`](Self::take_touched).
    touched: DirtyPages,
}

impl Default for LcdPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl LcdPanel {
    pub fn new() -> Self {
        Self {
            ram: [[0; WIDTH]; PAGES],
            page_writes: 0,
            touched: DirtyPages::EMPTY,
        }
    }

    pub fn page(&self, page: u8) -> Option<&PageBytes> {
        self.ram.get(page as usize)
    }

    /// Pixel at `x` in 0..128, `y` in 0..64 (bit 0 of a page byte is its top row).
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.ram[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Total pages received since creation.
    pub fn page_writes(&self) -> u64 {
        self.page_writes
    }

    pub fn take_touched(&mut self) -> DirtyPages {
        std::mem::take(&mut self.touched)
    }
}

impl PageSink for LcdPanel {
    type Error = Infallible;

    fn write_page(&mut self, page: u8, bytes: &PageBytes) -> Result<(), Infallible> {
        if let Some(row) = self.ram.get_mut(page as usize) {
            *row = *bytes;
            self.touched.insert(page);
        }
        self.page_writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use crate::types::SpriteId;

    #[test]
    fn panel_mirrors_swapped_pages() {
        let mut r = Renderer::new();
        let mut panel = LcdPanel::new();
        r.draw_sprite(4, 8, SpriteId::PlayerStand);
        r.swap(&mut panel).unwrap();

        assert_eq!(panel.page_writes(), 2);
        assert_eq!(panel.page(4), r.surface().page(4));
        assert_eq!(panel.page(5), r.surface().page(5));
        assert_eq!(panel.take_touched().iter().collect::<Vec<_>>(), vec![4, 5]);
        assert!(panel.take_touched().is_empty());
    }

    #[test]
    fn pixel_reads_page_bits() {
        let mut panel = LcdPanel::new();
        let mut bytes = [0u8; WIDTH];
        bytes[7] = 0b1000_0001;
        panel.write_page(2, &bytes).unwrap();
        assert!(panel.pixel(7, 16));
        assert!(panel.pixel(7, 23));
        assert!(!panel.pixel(7, 17));
        assert!(!panel.pixel(200, 16));
    }
}
