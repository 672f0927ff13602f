//! Test fixture loader for agrmt golden datasets.
//!
//! Golden agreement cases pair a frequency vector with its expected agreement.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Relative path of the golden agreement dataset.
pub const AGREEMENT_CASES: &str = "golden/agreement_cases.json";

/// One golden case: a frequency vector and its expected agreement.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementCase {
    pub name: String,
    pub vector: Vec<i64>,
    pub agreement: f64,
}

#[derive(Debug, Deserialize)]
struct AgreementCases {
    cases: Vec<AgreementCase>,
}

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("golden").exists() && !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    if path.join("golden").exists() {
        path
    } else {
        path.join("test-fixtures")
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load every golden agreement case.
pub fn agreement_cases() -> Vec<AgreementCase> {
    load_fixture::<AgreementCases>(AGREEMENT_CASES).cases
}

/// Look up one golden agreement case by name.
pub fn agreement_case(name: &str) -> Option<AgreementCase> {
    agreement_cases().into_iter().find(|c| c.name == name)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
