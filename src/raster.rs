use image::{Rgb, RgbImage};
use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::screen;

/// Fill a `size` image by calling `pixel(column, row)` for every pixel, rows
/// in parallel. Rows count from the top.
pub fn scan_rows(size: screen::Size, pixel: impl Fn(u32, u32) -> Rgb<u8> + Sync) -> RgbImage {
    let mut image = RgbImage::new(size.width, size.height);
    let row_length = size.width as usize * 3;
    if row_length == 0 {
        return image;
    }

    image
        .par_chunks_mut(row_length)
        .enumerate()
        .for_each(|(row, pixels)| {
            trace!("row {}", row);
            for (column, rgb) in pixels.chunks_exact_mut(3).enumerate() {
                let Rgb(channels) = pixel(column as u32, row as u32);
                rgb.copy_from_slice(&channels);
            }
        });
    image
}
