//! Text cleanup for the fields pulled out of a promotional container.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit-run regex"));

/// Reads the discount percentage from badge text such as `"35% OFF"`.
///
/// Only the first run of ASCII digits counts. Returns `None` when the text
/// has no digits or the run is not a percentage (greater than 100).
#[must_use]
pub fn parse_discount(badge_text: &str) -> Option<u8> {
    let run = DIGIT_RUN.find(badge_text)?;
    // A run too long for u32 is certainly > 100.
    let value = run.as_str().parse::<u32>().ok()?;
    u8::try_from(value).ok().filter(|pct| *pct <= 100)
}

/// Collapses every whitespace run to one space and trims both ends.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops currency symbols, spaces and any other decoration from a price,
/// keeping ASCII digits and the `.`/`,` separators.
///
/// Thousands separators survive: `"R$ 1.234,56"` becomes `"1.234,56"`, not
/// `"1234,56"`.
#[must_use]
pub fn normalize_price(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
