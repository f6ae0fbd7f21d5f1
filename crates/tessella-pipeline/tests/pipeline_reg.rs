//! Per-image run regression test
//!
//! Run with:
//! ```
//! cargo test -p tessella-pipeline --test pipeline_reg
//! ```

use std::cell::Cell;

use tessella_core::{LabelMap, Mask, Raster};
use tessella_pipeline::{
    Collaborators, PipelineError, PipelineOptions, PipelineResult, SegmentationOutcome, Stage,
    segment_and_render, segment_image,
};
use tessella_test::{RegParams, synthetic};

/// Nearest-neighbour resampling
fn nearest(raster: &Raster, width: u32, height: u32) -> PipelineResult<Raster> {
    let (sw, sh) = raster.dimensions();
    Ok(Raster::from_fn(width, height, |x, y| {
        raster.get(x * sw / width, y * sh / height).unwrap_or(0)
    })?)
}

fn lit(raster: &Raster) -> PipelineResult<Mask> {
    Ok(raster.threshold_above(0))
}

fn unlit(raster: &Raster) -> PipelineResult<Mask> {
    Ok(raster.threshold_above(0).invert())
}

fn identity_hull(mask: &Mask) -> PipelineResult<Mask> {
    Ok(mask.clone())
}

fn identity_enhance(raster: &Raster) -> PipelineResult<Raster> {
    Ok(raster.clone())
}

/// Zero cells get label 0, the rest are split into `k - 1` intensity bands.
fn intensity_bands(raster: &Raster, k: usize) -> PipelineResult<LabelMap> {
    if k < 2 {
        return Err(PipelineError::collaborator(
            Stage::Cluster,
            format!("need at least 2 clusters, got {}", k),
        ));
    }
    let labels = raster
        .as_slice()
        .iter()
        .map(|&v| {
            if v == 0 {
                0
            } else {
                1 + ((v as usize * (k - 1)) / 256).min(k - 2) as u32
            }
        })
        .collect();
    Ok(LabelMap::from_vec(raster.width(), raster.height(), labels)?)
}

fn collaborators() -> Collaborators<'static> {
    Collaborators {
        resizer: &nearest,
        seeder: &lit,
        hull: &identity_hull,
        enhancer: &identity_enhance,
        clusterer: &intensity_bands,
    }
}

fn options() -> PipelineOptions {
    PipelineOptions {
        working_resolution: 32,
        ..Default::default()
    }
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // 64x64 disc sampled down to 32x32: scale factor 2
    let input = synthetic::radial_disc(64).unwrap();
    let outcome = segment_image(&input, 1, &collaborators(), &options()).unwrap();

    // Seed bounds of the disc, crop drops the last row and column
    assert_eq!(outcome.bounds.as_tuple(), (10, 22, 10, 22));
    rp.compare_values(12.0, outcome.crop.width() as f64, 0.0);
    rp.compare_values(12.0, outcome.crop.height() as f64, 0.0);

    // Diagonal range 150 gives cutoff 15 and offset 30
    rp.compare_values(150.0, outcome.threshold.range as f64, 0.0);
    rp.compare_values(15.0, outcome.threshold.cutoff as f64, 0.0);
    rp.compare_values(30.0, outcome.offset as f64, 0.0);
    rp.compare_values(101.0, outcome.threshold.foreground.count_foreground() as f64, 0.0);

    // Eight histogram peaks are too far from one expected component
    rp.compare_values(8.0, outcome.estimate.num_peaks as f64, 0.0);
    rp.compare_values(2.0, outcome.k() as f64, 0.0);

    // The single non-background cluster is covered exactly
    assert_eq!(outcome.layout.background_labels, vec![0]);
    let area: u64 = outcome.local_regions().iter().map(|r| r.area()).sum();
    rp.compare_values(101.0, area as f64, 0.0);
    assert!(outcome.local_regions().iter().all(|r| r.size <= 3));

    // Rescaled squares land on the disc in the input
    rp.compare_values(
        outcome.local_regions().len() as f64,
        outcome.regions().len() as f64,
        0.0,
    );
    for (local, scaled) in outcome.local_regions().iter().zip(outcome.regions()) {
        assert_eq!(scaled.x, ((local.x + 10) * 2) as f64);
        assert_eq!(scaled.y, ((local.y + 10) * 2) as f64);
        assert_eq!(scaled.size, (local.size * 2) as f64);
        assert!(input.get(scaled.x as u32, scaled.y as u32).unwrap() > 0);
    }

    // More expected components: K follows the peaks, cover is unchanged
    let outcome = segment_image(&input, 8, &collaborators(), &options()).unwrap();
    rp.compare_values(9.0, outcome.k() as f64, 0.0);
    let area: u64 = outcome.local_regions().iter().map(|r| r.area()).sum();
    rp.compare_values(101.0, area as f64, 0.0);

    // Seed polarity does not matter
    let inverted = Collaborators {
        seeder: &unlit,
        ..collaborators()
    };
    let outcome = segment_image(&input, 1, &inverted, &options()).unwrap();
    assert_eq!(outcome.bounds.as_tuple(), (10, 22, 10, 22));

    assert!(rp.cleanup(), "pipeline regression test failed");
}

#[test]
fn render_reg() {
    let mut rp = RegParams::new("render");
    let input = synthetic::radial_disc(64).unwrap();

    let drawn = Cell::new(0usize);
    let count = |_: &Raster, outcome: &SegmentationOutcome| -> PipelineResult<()> {
        drawn.set(outcome.regions().len());
        Ok(())
    };
    let outcome = segment_and_render(&input, 1, &collaborators(), &count, &options()).unwrap();
    rp.compare_values(outcome.regions().len() as f64, drawn.get() as f64, 0.0);

    fn broken(_: &Raster, _: &SegmentationOutcome) -> PipelineResult<()> {
        Err(PipelineError::InvalidParameters("no output directory".into()))
    }
    let err = segment_and_render(&input, 1, &collaborators(), &broken, &options()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Collaborator {
            stage: Stage::Render,
            ..
        }
    ));

    assert!(rp.cleanup(), "render regression test failed");
}
