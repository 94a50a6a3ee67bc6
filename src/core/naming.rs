//! Case conversions behind the library's naming conventions.
//!
//! Raw identifiers from templates (`b-form-input`, `BButton`, `b-tooltip`) and
//! catalog names (`BFormInput`, `VBTooltip`) meet here:
//!
//! - components are matched in PascalCase,
//! - directives are matched in PascalCase with the directive marker prepended,
//! - directives are registered under the hyphen-case name with the marker
//!   word dropped again.

use std::sync::LazyLock;

use regex::Regex;

/// Boundary between a lowercase letter or digit and an uppercase letter (`aB`, `1B`).
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Boundary inside an uppercase run that starts a new word (`BTo` in `VBTooltip`).
static UPPER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("valid regex"));

/// Anything that is not an ASCII letter or digit separates words.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid regex"));

/// Split an identifier into its words.
///
/// ```
/// use bvtrim::core::naming::split_words;
///
/// assert_eq!(split_words("b-form-input"), vec!["b", "form", "input"]);
/// assert_eq!(split_words("VBTooltip"), vec!["VB", "Tooltip"]);
/// assert_eq!(split_words("  "), Vec::<String>::new());
/// ```
pub fn split_words(input: &str) -> Vec<String> {
    let marked = LOWER_UPPER.replace_all(input, "${1}\0${2}");
    let marked = UPPER_WORD.replace_all(&marked, "${1}\0${2}");
    let marked = SEPARATORS.replace_all(&marked, "\0");

    marked
        .split('\0')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert to capitalized camel case: `b-form-input` -> `BFormInput`.
pub fn pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(index, word)| capitalize_word(word, index))
        .collect()
}

/// Convert to lowercase hyphen-separated form: `VBTooltip` -> `vb-tooltip`.
pub fn param_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize_word(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_lowercase();

    if index > 0 && first.is_ascii_digit() {
        format!("_{first}{rest}")
    } else {
        format!("{}{rest}", first.to_uppercase())
    }
}

/// Catalog form of a component tag: `b-button` and `BButton` both become `BButton`.
pub fn component_name(raw: &str) -> String {
    pascal_case(raw)
}

/// Catalog form of a directive name: `b-tooltip` with marker `V` becomes `VBTooltip`.
pub fn directive_name(raw: &str, marker: char) -> String {
    format!("{marker}{}", pascal_case(raw))
}

/// Name a directive is registered under, undoing the marker added by [`directive_name`].
///
/// The canonical name is hyphenated first and the marker word is then removed,
/// so a marker that was merged into the next word (`vb-tooltip`) and one that
/// stands alone (`v-highlight`) both come out right.
///
/// ```
/// use bvtrim::core::naming::registered_directive_name;
///
/// assert_eq!(registered_directive_name("VBTooltip", 'V'), "b-tooltip");
/// assert_eq!(registered_directive_name("VHighlight", 'V'), "highlight");
/// ```
pub fn registered_directive_name(canonical: &str, marker: char) -> String {
    let hyphenated = param_case(canonical);
    let marker = marker.to_lowercase().to_string();

    match hyphenated.strip_prefix(marker.as_str()) {
        Some(rest) => rest.strip_prefix('-').unwrap_or(rest).to_string(),
        None => hyphenated,
    }
}
