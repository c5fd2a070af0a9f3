//! CPU reference rasterizer.
//!
//! Renders the classic Mandelbrot set (the constant is the pixel's own point)
//! over a fixed window of the plane, with no pan or zoom. Each pixel's red and
//! green channels hold the raw escape count; blue is always zero.

use std::num::NonZeroU32;

use image::{Rgb, RgbImage};
use log::debug;

use crate::{complex::Complex, escape::escape_count, raster, screen};

/// The fixed plane window. The real axis always spans
/// `[real_min, real_min + span]`; the imaginary axis is derived from the
/// image height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneWindow {
    pub real_min: f32,
    pub imaginary_min: f32,
    pub span: f32,
    /// Fraction of the height the imaginary axis is shifted down by.
    pub imaginary_shift: f32,
}

impl Default for PlaneWindow {
    fn default() -> Self {
        Self {
            real_min: -1.8,
            imaginary_min: -0.9,
            span: 3.0,
            imaginary_shift: 0.17,
        }
    }
}

impl PlaneWindow {
    pub fn point(&self, x: u32, y: u32, size: screen::Size) -> Complex {
        let width = size.width as f32;
        let height = size.height as f32;
        Complex::new(
            self.real_min + x as f32 / width * self.span,
            self.imaginary_min + (y as f32 - height * self.imaginary_shift) / height * self.span,
        )
    }
}

/// Scan every pixel of a `size` image, rows in parallel.
pub fn rasterize(size: screen::Size, window: &PlaneWindow, max_iterations: NonZeroU32) -> RgbImage {
    debug!("rasterizing {}x{} reference", size.width, size.height);

    raster::scan_rows(size, |x, y| {
        let point = window.point(x, y, size);
        let channel = escape_count(point, point, max_iterations).min(u8::MAX as u32) as u8;
        Rgb([channel, channel, 0])
    })
}

/// Run [`rasterize`] on a dedicated pool of `threads` workers.
pub fn rasterize_with_threads(
    size: screen::Size,
    window: &PlaneWindow,
    max_iterations: NonZeroU32,
    threads: usize,
) -> Result<RgbImage, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    Ok(pool.install(|| rasterize(size, window, max_iterations)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn window_corners() {
        let window = PlaneWindow::default();
        let size = screen::Size::new(300, 100);

        let top_left = window.point(0, 0, size);
        assert_eq!(top_left.real, -1.8);
        assert!((top_left.imaginary - (-0.9 - 0.17 * 3.0)).abs() < 1e-6);

        let middle = window.point(150, 17, size);
        assert!((middle.real + 0.3).abs() < 1e-6);
        assert!((middle.imaginary + 0.9).abs() < 1e-6);
    }

    #[test]
    fn image_has_requested_size_and_no_blue() {
        let image = rasterize(screen::Size::new(40, 30), &PlaneWindow::default(), cap(201));
        assert_eq!(image.dimensions(), (40, 30));
        for Rgb([red, green, blue]) in image.pixels() {
            assert_eq!(red, green);
            assert_eq!(*blue, 0);
        }
    }

    #[test]
    fn pixels_hold_raw_escape_counts() {
        let window = PlaneWindow::default();
        let size = screen::Size::new(32, 24);
        let image = rasterize(size, &window, cap(201));

        for (x, y, pixel) in image.enumerate_pixels() {
            let point = window.point(x, y, size);
            let count = escape_count(point, point, cap(201));
            assert_eq!(pixel.0[0] as u32, count, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn interior_reaches_cap() {
        // x = 180 of 300 maps to real 0.0; y = 47 of 100 is close to the real axis.
        let size = screen::Size::new(300, 100);
        let image = rasterize(size, &PlaneWindow::default(), cap(201));
        assert_eq!(image.get_pixel(180, 47).0, [201, 201, 0]);
    }

    #[test]
    fn counts_above_a_byte_saturate() {
        let size = screen::Size::new(300, 100);
        let image = rasterize(size, &PlaneWindow::default(), cap(1000));
        assert_eq!(image.get_pixel(180, 47).0, [255, 255, 0]);
    }

    #[test]
    fn dedicated_pool_matches_global_pool() {
        let size = screen::Size::new(16, 12);
        let window = PlaneWindow::default();
        let pooled = rasterize_with_threads(size, &window, cap(50), 2).unwrap();
        assert_eq!(pooled, rasterize(size, &window, cap(50)));
    }

    #[test]
    fn empty_image() {
        let image = rasterize(screen::Size::new(0, 0), &PlaneWindow::default(), cap(10));
        assert_eq!(image.dimensions(), (0, 0));
    }
}
