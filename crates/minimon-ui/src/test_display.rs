//! Test display that allows pixel overdraw.
//!
//! `MockDisplay` from embedded-graphics panics when a pixel is drawn twice,
//! which doesn't work for screens that layer text over cleared backgrounds.
//! This simple framebuffer allows overdraw for render smoke-tests.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// Simple framebuffer display for tests that allows overdraw.
pub struct TestDisplay {
    pixels: Vec<BinaryColor>,
    width: u32,
    height: u32,
}

impl TestDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![BinaryColor::Off; (width * height) as usize],
            width,
            height,
        }
    }

    /// Create a display matching the device panel (128x32).
    pub fn default_size() -> Self {
        Self::new(crate::DISPLAY_WIDTH, crate::DISPLAY_HEIGHT)
    }

    /// Number of lit pixels; handy for "something was drawn" assertions.
    pub fn black_pixel_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| **p == BinaryColor::On)
            .count()
    }

    pub fn clear_buffer(&mut self) {
        self.pixels.fill(BinaryColor::Off);
    }
}

impl DrawTarget for TestDisplay {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height
            {
                let idx = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_display_allows_overdraw() {
        let mut display = TestDisplay::new(10, 10);

        Rectangle::new(Point::new(0, 0), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut display)
            .unwrap();

        Rectangle::new(Point::new(0, 0), Size::new(5, 5))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.black_pixel_count(), 25);
    }

    #[test]
    fn test_display_default_size() {
        let display = TestDisplay::default_size();
        assert_eq!(display.size(), Size::new(128, 32));
    }
}
