//! Square packing regression test
//!
//! Run with:
//! ```
//! cargo test -p tessella-region --test pack_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p tessella-region --test pack_reg
//! ```

use tessella_core::{Mask, SquareRegion};
use tessella_region::{PackOptions, cap_box_size, pack_mask, pack_squares};
use tessella_test::{RegParams, synthetic};

/// Repaint `regions` onto a blank mask, counting cells painted twice.
fn repaint(width: u32, height: u32, regions: &[SquareRegion]) -> (Mask, usize) {
    let mut mask = Mask::new(width, height).unwrap();
    let mut overlaps = 0;
    for region in regions {
        for (x, y) in region.cells() {
            if mask.is_foreground(x, y) {
                overlaps += 1;
            }
            mask.set(x, y, true).unwrap();
        }
    }
    (mask, overlaps)
}

#[test]
fn pack_reg() {
    let mut rp = RegParams::new("pack");

    // --- Solid square below the cap: one region ---
    let mask = synthetic::solid_square(40, 40, 5, 9, 8).unwrap();
    let result = pack_mask(&mask, &PackOptions::default()).unwrap();
    rp.compare_values(8.0, result.max_box_size as f64, 0.0);
    rp.compare_regions(&[SquareRegion::new(5, 9, 8)], &result.regions);

    // --- Checkerboard: one unit square per foreground cell, scan order ---
    let mask = synthetic::checkerboard(9, 7).unwrap();
    let result = pack_mask(&mask, &PackOptions::default()).unwrap();
    let expected: Vec<SquareRegion> = mask
        .foreground_column_major()
        .into_iter()
        .map(|(x, y)| SquareRegion::new(x, y, 1))
        .collect();
    rp.compare_values(mask.count_foreground() as f64, result.regions.len() as f64, 0.0);
    rp.compare_regions(&expected, &result.regions);

    // --- Random masks: exact cover, no overlap, cap respected ---
    for (seed, density) in [(1u64, 0.3), (2, 0.6), (3, 0.9)] {
        let mask = synthetic::random_mask(48, 32, density, seed).unwrap();
        let result = pack_mask(&mask, &PackOptions::default()).unwrap();
        let (painted, overlaps) = repaint(48, 32, &result.regions);

        rp.compare_masks(&mask, &painted);
        rp.compare_values(0.0, overlaps as f64, 0.0);
        let area: u64 = result.regions.iter().map(|r| r.area()).sum();
        rp.compare_values(mask.count_foreground() as f64, area as f64, 0.0);
        assert!(result.remaining.is_blank());
        let again = pack_mask(&result.remaining, &PackOptions::default()).unwrap();
        rp.compare_values(0.0, again.regions.len() as f64, 0.0);
        assert!(
            result
                .regions
                .iter()
                .all(|r| r.size >= 1 && r.size <= result.max_box_size)
        );
        for region in &result.regions {
            assert!(mask.is_square_foreground(region));
        }

        if seed == 2 {
            rp.write_regions_and_check(&result.regions).unwrap();
        }
    }

    // --- Idempotence on an unchanged mask ---
    let mask = synthetic::random_mask(30, 30, 0.7, 11).unwrap();
    let first = pack_mask(&mask, &PackOptions::default()).unwrap();
    let second = pack_mask(&mask, &PackOptions::default()).unwrap();
    rp.compare_regions(&first.regions, &second.regions);

    // --- Large solid mask splits into cap-sized squares ---
    let mut mask = Mask::from_fn(128, 128, |_, _| true).unwrap();
    let cap = cap_box_size(128, 128, 0.2).unwrap();
    rp.compare_values(26.0, cap as f64, 0.0);
    let regions = pack_squares(&mut mask, cap);
    rp.compare_regions(&[SquareRegion::new(0, 0, 26)], &regions[..1]);
    rp.compare_values(16384.0, regions.iter().map(|r| r.area()).sum::<u64>() as f64, 0.0);
    assert!(mask.is_blank());

    // --- Blank mask ---
    let mask = Mask::new(16, 16).unwrap();
    let result = pack_mask(&mask, &PackOptions::default()).unwrap();
    rp.compare_values(0.0, result.regions.len() as f64, 0.0);

    assert!(rp.cleanup(), "pack regression test failed");
}
