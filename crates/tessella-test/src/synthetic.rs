//! Synthetic masks and rasters for regression tests

use crate::error::{TestError, TestResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tessella_core::{Mask, Raster};

/// A `width` x `height` mask with one solid `n` x `n` square at `(x, y)`.
pub fn solid_square(width: u32, height: u32, x: u32, y: u32, n: u32) -> TestResult<Mask> {
    Ok(Mask::from_fn(width, height, |cx, cy| {
        cx >= x && cx < x + n && cy >= y && cy < y + n
    })?)
}

/// Isolated single-pixel foreground: cells where `x + y` is even.
pub fn checkerboard(width: u32, height: u32) -> TestResult<Mask> {
    Ok(Mask::from_fn(width, height, |x, y| (x + y) % 2 == 0)?)
}

/// Random mask where each cell is foreground with probability `density`.
///
/// The same `seed` always produces the same mask.
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Mask> {
    if !(0.0..=1.0).contains(&density) {
        return Err(TestError::Fixture {
            name: "random_mask".to_string(),
            message: format!("density {} outside [0, 1]", density),
        });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Mask::from_fn(width, height, |_, _| rng.random_bool(density))?)
}

/// Raster of vertical stripes, one per entry of `levels`, of equal width.
///
/// Any leftover columns on the right take the last level.
pub fn band_raster(width: u32, height: u32, levels: &[u32]) -> TestResult<Raster> {
    if levels.is_empty() {
        return Err(TestError::Fixture {
            name: "band_raster".to_string(),
            message: "at least one level is required".to_string(),
        });
    }
    let band = (width / levels.len() as u32).max(1);
    Ok(Raster::from_fn(width, height, |x, _| {
        let i = ((x / band) as usize).min(levels.len() - 1);
        levels[i]
    })?)
}

/// Radial intensity disc, `150 - r^2` clipped at 0, centred in a `size` x `size` raster.
///
/// Mimics the bright round specimen on a dark field that the pipeline
/// was tuned for.
pub fn radial_disc(size: u32) -> TestResult<Raster> {
    let c = (size / 2) as i64;
    Ok(Raster::from_fn(size, size, |x, y| {
        let dx = x as i64 - c;
        let dy = y as i64 - c;
        (150 - dx * dx - dy * dy).max(0) as u32
    })?)
}
