//! Golden formatting corpus.
//!
//! Each `tests/fixtures/*.toml` file holds `[[case]]` tables with a raw
//! field value plus the expected pure number and display string. Set
//! `PHONE_FORMAT_FIXTURE=<substring>` to run a subset.

use phone_format::{PhoneFormatter, TemplateFormatter};
use phone_types::CountryCode;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(rename = "case")]
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    raw: String,
    /// Alpha-2 code; absent means "no country selected".
    country: Option<String>,
    #[serde(default)]
    prefix: String,
    number: String,
    formatted: String,
}

#[test]
fn golden_formatting_corpus() {
    let fmt = PhoneFormatter::new(TemplateFormatter::new());
    let filter = env::var("PHONE_FORMAT_FIXTURE").ok();
    let mut ran = 0usize;

    for path in fixture_paths() {
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
        let file: FixtureFile = toml::from_str(&content)
            .unwrap_or_else(|err| panic!("invalid fixture {path:?}: {err}"));

        for case in &file.cases {
            if let Some(filter) = &filter {
                if !case.name.contains(filter.as_str()) {
                    continue;
                }
            }
            ran += 1;

            let country = case.country.as_deref().map(|code| {
                CountryCode::new(code)
                    .unwrap_or_else(|| panic!("bad country {code:?} in case '{}'", case.name))
            });
            let value = fmt.format(&case.raw, country, &case.prefix);
            assert_eq!(
                value.number, case.number,
                "pure number mismatch in case '{}' ({path:?})",
                case.name
            );
            assert_eq!(
                value.number_formatted, case.formatted,
                "display mismatch in case '{}' ({path:?})",
                case.name
            );
        }
    }

    assert!(ran > 0, "no fixture cases matched filter");
}

fn fixture_paths() -> Vec<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");
    let mut paths: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap_or_else(|err| panic!("failed to read fixture root {root:?}: {err}"))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths
}
