//! Systems and their headers

use stemscale_core::Box;

use crate::Sig;

/// Area at the start of a system holding clefs, keys and time signatures
///
/// `start..stop` is the horizontal extent and `top..bottom` the vertical
/// extent, both half-open in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemHeader {
    pub start: i32,
    pub stop: i32,
    pub top: i32,
    pub bottom: i32,
}

impl SystemHeader {
    pub fn new(start: i32, stop: i32, top: i32, bottom: i32) -> Self {
        Self {
            start,
            stop,
            top,
            bottom,
        }
    }

    /// Header rectangle grown vertically by `margin` pixels on each side
    ///
    /// The grown edges stop at half the `i32` range so that the height of
    /// the rectangle stays representable.
    pub fn area(&self, margin: i32) -> Box {
        const LIMIT: i64 = (i32::MAX / 2) as i64;
        let grow = |edge: i32, delta: i64| (i64::from(edge) + delta).clamp(-LIMIT, LIMIT) as i32;
        let margin = i64::from(margin);
        Box::from_corners(self.start, grow(self.top, -margin), self.stop, grow(self.bottom, margin))
    }
}

/// One system of the page
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub id: u32,
    pub header: Option<SystemHeader>,
    pub sig: Sig,
}

impl SystemInfo {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            header: None,
            sig: Sig::new(),
        }
    }

    pub fn with_header(mut self, header: SystemHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_sig(mut self, sig: Sig) -> Self {
        self.sig = sig;
        self
    }

    pub fn sig(&self) -> &Sig {
        &self.sig
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_area() {
        let header = SystemHeader::new(10, 40, 100, 180);
        assert_eq!(header.area(0), Box::new_unchecked(10, 100, 30, 80));
        assert_eq!(header.area(16), Box::new_unchecked(10, 84, 30, 112));
    }

    #[test]
    fn test_huge_margin_covers_page_height() {
        let header = SystemHeader::new(5, 10, 10, 20);
        let area = header.area(i32::MAX);
        assert_eq!(area.clip(30, 30), Some(Box::new_unchecked(5, 0, 5, 30)));
    }
}
