//! tessella-test - Regression test framework for Tessella
//!
//! This crate provides a small regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! plus [`synthetic`] fixtures (solid squares, checkerboards, seeded
//! random masks, intensity bands, a radial disc).
//!
//! # Usage
//!
//! ```ignore
//! use tessella_test::RegParams;
//!
//! let mut rp = RegParams::new("pack");
//! rp.compare_values(1.0, regions.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // tessella-test is at crates/tessella-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
