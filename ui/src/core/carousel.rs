//! Cyclic slide counter backing the image carousel.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slide {index} is out of range for a carousel of {len} slides")]
pub struct SlideOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Bounded counter over `0..len`. `advance`/`retreat` wrap; there is no
/// terminal state. An empty carousel ignores every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump straight to `index`. Out-of-range requests leave the counter untouched.
    pub fn select(&mut self, index: usize) -> Result<(), SlideOutOfRange> {
        if index >= self.len {
            return Err(SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Re-bind to a slide list of `len` entries, clamping the current index.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }
}
