//! Shared test utilities for `kirigami-core`.

use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration.
///
/// `PROPTEST_CASES` overrides the per-suite default so CI can dial the
/// property suites up or down without code changes.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
