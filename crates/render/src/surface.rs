//! Double-buffered page surface with dirty-page tracking.
//!
//! `current` is what the game has drawn; `previous` is what the panel last
//! received. A page is dirty while at least one of its bytes differs between
//! the two, so a flush only pays for pages that actually changed.

use std::fmt;

use crate::types::{PAGES, WIDTH};

/// One page of panel RAM.
pub type PageBytes = [u8; WIDTH];

/// Receiver for flushed pages (the LCD bus, a terminal mirror, a test log).
pub trait PageSink {
    type Error;

    fn write_page(&mut self, page: u8, bytes: &PageBytes) -> Result<(), Self::Error>;
}

impl<S: PageSink + ?Sized> PageSink for &mut S {
    type Error = S::Error;

    fn write_page(&mut self, page: u8, bytes: &PageBytes) -> Result<(), Self::Error> {
        (**self).write_page(page, bytes)
    }
}

/// In-memory sink that records every transmitted page.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    writes: Vec<(u8, PageBytes)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[(u8, PageBytes)] {
        &self.writes
    }

    /// Page indices in transmission order.
    pub fn pages(&self) -> Vec<u8> {
        self.writes.iter().map(|(p, _)| *p).collect()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl PageSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn write_page(&mut self, page: u8, bytes: &PageBytes) -> Result<(), Self::Error> {
        self.writes.push((page, *bytes));
        Ok(())
    }
}

/// Set of page indices, iterated in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirtyPages(u8);

impl DirtyPages {
    pub const EMPTY: DirtyPages = DirtyPages(0);
    pub const ALL: DirtyPages = DirtyPages(u8::MAX);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(self, page: u8) -> bool {
        (page as usize) < PAGES && self.0 & (1 << page) != 0
    }

    pub fn insert(&mut self, page: u8) {
        if (page as usize) < PAGES {
            self.0 |= 1 << page;
        }
    }

    pub fn remove(&mut self, page: u8) {
        if (page as usize) < PAGES {
            self.0 &= !(1 << page);
        }
    }

    pub fn union(self, other: DirtyPages) -> DirtyPages {
        DirtyPages(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..PAGES as u8).filter(move |&p| self.contains(p))
    }
}

impl fmt::Display for DirtyPages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, page) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", page)?;
        }
        f.write_str("}")
    }
}

/// Current/previous page buffers plus the dirty set.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameSurface {
    current: [PageBytes; PAGES],
    previous: [PageBytes; PAGES],
    /// Pages whose content differs from `previous`.
    dirty: DirtyPages,
    /// Pages explicitly invalidated; sent on the next swap even if unchanged.
    forced: DirtyPages,
}

impl fmt::Debug for FrameSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSurface")
            .field("dirty", &self.dirty)
            .field("forced", &self.forced)
            .finish_non_exhaustive()
    }
}

impl Default for FrameSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSurface {
    pub fn new() -> Self {
        Self {
            current: [[0; WIDTH]; PAGES],
            previous: [[0; WIDTH]; PAGES],
            dirty: DirtyPages::EMPTY,
            forced: DirtyPages::EMPTY,
        }
    }

    /// Pages that will be transmitted by the next [`swap`](Self::swap).
    pub fn dirty(&self) -> DirtyPages {
        self.dirty.union(self.forced)
    }

    pub fn page(&self, page: u8) -> Option<&PageBytes> {
        self.current.get(page as usize)
    }

    pub fn read_byte(&self, page: u8, column: u8) -> u8 {
        self.current
            .get(page as usize)
            .and_then(|row| row.get(column as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Store one byte. Coordinates outside the panel are clipped.
    pub fn write_byte(&mut self, page: u8, column: u8, value: u8) {
        let (p, c) = (page as usize, column as usize);
        if p >= PAGES || c >= WIDTH {
            return;
        }
        self.current[p][c] = value;

        if value != self.previous[p][c] {
            self.dirty.insert(page);
        } else if self.dirty.contains(page) && self.current[p] == self.previous[p] {
            // The page is back to what the panel already shows.
            self.dirty.remove(page);
        }
    }

    /// Zero `width` bytes starting at `column_start`.
    pub fn clear_region(&mut self, page: u8, column_start: u8, width: u8) {
        for dx in 0..width {
            let Some(column) = column_start.checked_add(dx) else {
                break;
            };
            self.write_byte(page, column, 0);
        }
    }

    /// Zero the whole drawing buffer.
    pub fn clear(&mut self) {
        for page in 0..PAGES as u8 {
            self.clear_region(page, 0, WIDTH as u8);
        }
    }

    /// Force `page` out on the next swap.
    pub fn mark_dirty(&mut self, page: u8) {
        self.forced.insert(page);
    }

    /// Force pages `start..=end` out on the next swap.
    pub fn mark_dirty_region(&mut self, start: u8, end: u8) {
        for page in start..=end.min(PAGES as u8 - 1) {
            self.mark_dirty(page);
        }
    }

    /// Transmit dirty pages in ascending order and return the transmitted set.
    ///
    /// On a sink error the pages not yet transmitted stay dirty.
    pub fn swap<S: PageSink>(&mut self, sink: &mut S) -> Result<DirtyPages, S::Error> {
        let pending = self.dirty();
        self.transmit(pending, sink)?;
        Ok(pending)
    }

    /// Transmit every page regardless of the dirty set.
    pub fn force_flush<S: PageSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.transmit(DirtyPages::ALL, sink)
    }

    fn transmit<S: PageSink>(&mut self, pages: DirtyPages, sink: &mut S) -> Result<(), S::Error> {
        for page in pages.iter() {
            let p = page as usize;
            sink.write_page(page, &self.current[p])?;
            self.previous[p] = self.current[p];
            self.dirty.remove(page);
            self.forced.remove(page);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_marks_page_dirty() {
        let mut s = FrameSurface::new();
        s.write_byte(3, 10, 0xAA);
        assert_eq!(s.dirty(), DirtyPages::from_bits(1 << 3));
        assert_eq!(s.read_byte(3, 10), 0xAA);
    }

    #[test]
    fn reverting_a_write_cleans_the_page() {
        let mut s = FrameSurface::new();
        s.write_byte(2, 5, 0xFF);
        s.write_byte(2, 5, 0x00);
        assert!(s.dirty().is_empty());
    }

    #[test]
    fn reverting_one_of_two_changes_keeps_page_dirty() {
        let mut s = FrameSurface::new();
        s.write_byte(2, 5, 0xFF);
        s.write_byte(2, 6, 0xFF);
        s.write_byte(2, 5, 0x00);
        assert!(s.dirty().contains(2));
    }

    #[test]
    fn out_of_range_writes_are_clipped() {
        let mut s = FrameSurface::new();
        s.write_byte(8, 0, 0xFF);
        s.write_byte(0, 128, 0xFF);
        assert!(s.dirty().is_empty());
        assert_eq!(s.read_byte(8, 0), 0);
    }

    #[test]
    fn swap_transmits_ascending_and_empties_dirty() {
        let mut s = FrameSurface::new();
        s.write_byte(5, 0, 1);
        s.write_byte(1, 0, 1);
        let mut sink = RecordingSink::new();

        let sent = s.swap(&mut sink).unwrap();
        assert_eq!(sink.pages(), vec![1, 5]);
        assert_eq!(sent.len(), 2);
        assert!(s.dirty().is_empty());

        sink.clear();
        let sent = s.swap(&mut sink).unwrap();
        assert!(sent.is_empty());
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn forced_pages_are_sent_even_if_unchanged() {
        let mut s = FrameSurface::new();
        s.mark_dirty_region(6, 9);
        let mut sink = RecordingSink::new();
        s.swap(&mut sink).unwrap();
        assert_eq!(sink.pages(), vec![6, 7]);
    }

    #[test]
    fn force_flush_sends_every_page() {
        let mut s = FrameSurface::new();
        s.write_byte(0, 0, 1);
        let mut sink = RecordingSink::new();
        s.force_flush(&mut sink).unwrap();
        assert_eq!(sink.pages(), (0..8).collect::<Vec<_>>());
        assert!(s.dirty().is_empty());
    }

    struct FailOn(u8);

    impl PageSink for FailOn {
        type Error = u8;

        fn write_page(&mut self, page: u8, _bytes: &PageBytes) -> Result<(), u8> {
            if page == self.0 {
                Err(page)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn sink_error_leaves_remaining_pages_dirty() {
        let mut s = FrameSurface::new();
        for page in [0, 3, 6] {
            s.write_byte(page, 0, 1);
        }
        assert_eq!(s.swap(&mut FailOn(3)), Err(3));
        assert!(!s.dirty().contains(0));
        assert!(s.dirty().contains(3));
        assert!(s.dirty().contains(6));
    }

    #[test]
    fn dirty_pages_display() {
        assert_eq!(DirtyPages::from_bits(0b1010_0001).to_string(), "{0,5,7}");
        assert_eq!(DirtyPages::EMPTY.to_string(), "{}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn writes() -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
        proptest::collection::vec((0u8..PAGES as u8, 0u8..WIDTH as u8, any::<u8>()), 0..64)
    }

    // Property: after any write sequence, dirty is exactly the set of pages
    // whose bytes differ from what was last transmitted.
    proptest! {
        #[test]
        fn prop_dirty_matches_content_diff(first in writes(), second in writes()) {
            let mut s = FrameSurface::new();
            let mut sink = RecordingSink::new();
            for &(p, c, v) in &first {
                s.write_byte(p, c, v);
            }
            s.swap(&mut sink).unwrap();
            let shown = s.clone();

            for &(p, c, v) in &second {
                s.write_byte(p, c, v);
            }
            for page in 0..PAGES as u8 {
                let differs = s.page(page) != shown.page(page);
                prop_assert_eq!(s.dirty().contains(page), differs, "page {}", page);
            }
        }
    }

    // Property: a swap hands the sink exactly the dirty pages, ascending.
    proptest! {
        #[test]
        fn prop_swap_sends_dirty_pages_ascending(ops in writes()) {
            let mut s = FrameSurface::new();
            for &(p, c, v) in &ops {
                s.write_byte(p, c, v);
            }
            let expected: Vec<u8> = s.dirty().iter().collect();
            let mut sink = RecordingSink::new();
            s.swap(&mut sink).unwrap();
            prop_assert_eq!(sink.pages(), expected);
            prop_assert!(s.dirty().is_empty());
        }
    }
}
