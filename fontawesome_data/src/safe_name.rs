//! Conversion of raw kebab-case icon ids into symbol names for generated code.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Parenthesized annotation closed by a `&&` marker, e.g. `(hand)&&`.
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)&&").expect("annotation pattern is a valid regex"));

/// Derive a code-symbol-safe name from a raw icon id.
///
/// The transform is deterministic but one-way; feeding its output back in is
/// not guaranteed to be a no-op.
///
/// ```
/// use fontawesome_data::safe_name;
///
/// assert_eq!(safe_name("arrow-circle-o-right"), "ArrowCircleOutlineRight");
/// assert_eq!(safe_name("500px"), "_500px");
/// ```
pub fn safe_name(raw: &str) -> String {
    let expanded = expand_outline(raw);
    let titled = title_case(&expanded.replace('-', " "));
    let compact: String = titled
        .replace('/', "_")
        .chars()
        .filter(|ch| !matches!(ch, '-' | ' ' | '.' | '\''))
        .collect();

    // the hand check looks at the annotations themselves, not what is left after removing them
    let mentions_hand = ANNOTATION
        .find_iter(&compact)
        .any(|m| m.as_str().to_lowercase().contains("hand"));
    let mut name = ANNOTATION.replace_all(&compact, "").into_owned();

    if mentions_hand {
        name.insert_str(0, "Hand");
    }
    if name.starts_with(char::is_numeric) {
        name.insert(0, '_');
    }
    name
}

/// Spell out the legacy `-o` (outline) suffix.
///
/// Once triggered, every `-o` in the id is replaced, not only the one that matched.
fn expand_outline(raw: &str) -> Cow<'_, str> {
    if raw.ends_with("-o") || raw.contains("-o-") {
        Cow::Owned(raw.replace("-o", "-outline"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Uppercase the first character of each whitespace-delimited word; everything else keeps its case.
fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if word_start {
            titled.extend(ch.to_uppercase());
        } else {
            titled.push(ch);
        }
        word_start = ch.is_whitespace();
    }
    titled
}
