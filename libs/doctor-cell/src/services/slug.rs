use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Build a profile slug: the lowercased name with whitespace runs replaced
/// by `-`, followed by the last four digits of `timestamp_millis`.
///
/// Two doctors with the same name created in the same 10 second window can
/// get the same slug. The store's unique constraint catches that case.
pub fn profile_slug(name: &str, timestamp_millis: i64) -> String {
    let base = WHITESPACE.replace_all(&name.to_lowercase(), "-").into_owned();
    format!("{}-{:04}", base, timestamp_millis.rem_euclid(10_000))
}
