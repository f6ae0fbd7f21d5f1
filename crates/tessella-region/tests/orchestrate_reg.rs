//! Boundary finding and region assembly regression test
//!
//! Run with:
//! ```
//! cargo test -p tessella-region --test orchestrate_reg
//! ```

use tessella_core::{LabelMap, Mask, ScaledRegion};
use tessella_region::{
    OrchestratorOptions, PackOptions, RegionError, assemble_regions, collect_cluster_regions,
    find_boundaries,
};
use tessella_test::{RegParams, synthetic};

#[test]
fn boundary_reg() {
    let mut rp = RegParams::new("boundary");

    // Single foreground cell
    let mask = Mask::from_fn(10, 10, |x, y| x == 5 && y == 7).unwrap();
    let b = find_boundaries(&mask).unwrap();
    rp.compare_values(5.0, b.min_x as f64, 0.0);
    rp.compare_values(5.0, b.max_x as f64, 0.0);
    rp.compare_values(7.0, b.min_y as f64, 0.0);
    rp.compare_values(7.0, b.max_y as f64, 0.0);

    // Solid block
    let mask = synthetic::solid_square(64, 48, 10, 20, 12).unwrap();
    let b = find_boundaries(&mask).unwrap();
    assert_eq!(b.as_tuple(), (10, 21, 20, 31));
    rp.compare_values(12.0, b.width() as f64, 0.0);

    // Every foreground cell lies inside the bounds
    let mask = synthetic::random_mask(40, 40, 0.05, 5).unwrap();
    let b = find_boundaries(&mask).unwrap();
    for (x, y) in mask.foreground_column_major() {
        assert!(b.contains_point(x, y));
    }

    // Empty mask
    let mask = Mask::new(12, 12).unwrap();
    assert!(matches!(find_boundaries(&mask), Err(RegionError::EmptyMask)));

    assert!(rp.cleanup(), "boundary regression test failed");
}

#[test]
fn orchestrate_reg() {
    let mut rp = RegParams::new("orchestrate");

    // Background ring (label 0), inner disc (label 1), core (label 2)
    let labels = LabelMap::from_vec(
        20,
        20,
        (0..400u32)
            .map(|i| {
                let (x, y) = (i % 20, i / 20);
                if (8..12).contains(&x) && (8..12).contains(&y) {
                    2
                } else if (4..16).contains(&x) && (4..16).contains(&y) {
                    1
                } else {
                    0
                }
            })
            .collect(),
    )
    .unwrap();

    let pack = PackOptions::default();
    let (regions, background) = collect_cluster_regions(&labels, 3, &pack).unwrap();
    assert_eq!(background, vec![0]);

    // Cover of labels 1 and 2 is exact
    let area: u64 = regions.iter().map(|r| r.area()).sum();
    rp.compare_values(144.0, area as f64, 0.0);

    // Label 1 squares come before label 2 squares
    let first_core = regions
        .iter()
        .position(|r| labels.get(r.x, r.y) == Some(2))
        .unwrap();
    assert!(regions[..first_core].iter().all(|r| labels.get(r.x, r.y) == Some(1)));
    assert!(regions[first_core..].iter().all(|r| labels.get(r.x, r.y) == Some(2)));

    // Mapping to a 512-row original with crop offset (3, 6)
    let bounds = tessella_core::Bounds::new(3, 50, 6, 60).unwrap();
    let options = OrchestratorOptions {
        working_resolution: 128,
        pack: pack.clone(),
    };
    let layout = assemble_regions(&labels, 3, &bounds, 512, &options).unwrap();
    rp.compare_values(regions.len() as f64, layout.scaled.len() as f64, 0.0);
    for (local, scaled) in layout.local.iter().zip(&layout.scaled) {
        let expected = ScaledRegion {
            x: (local.x + 3) as f64 * 4.0,
            y: (local.y + 6) as f64 * 4.0,
            size: local.size as f64 * 4.0,
        };
        assert_eq!(*scaled, expected);
    }
    rp.compare_values(2.0, layout.per_label.len() as f64, 0.0);

    // Cluster count larger than the labels present
    let layout = assemble_regions(&labels, 6, &bounds, 512, &options).unwrap();
    rp.compare_values(regions.len() as f64, layout.local.len() as f64, 0.0);

    // Invalid working resolution
    let bad = OrchestratorOptions {
        working_resolution: 0,
        pack,
    };
    assert!(matches!(
        assemble_regions(&labels, 3, &bounds, 512, &bad),
        Err(RegionError::InvalidParameters(_))
    ));

    assert!(rp.cleanup(), "orchestrate regression test failed");
}
