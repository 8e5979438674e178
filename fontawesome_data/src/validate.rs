use std::collections::HashMap;
use std::fmt;

use crate::IconEntry;

/// Finding from [`validate_icons`] that would make the generated code unusable or surprising.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two different ids sanitize to the same symbol.
    DuplicateSafeName {
        safe_name: String,
        first: String,
        second: String,
    },
    EmptySafeName {
        id: String,
    },
    InvalidUnicode {
        id: String,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSafeName {
                safe_name,
                first,
                second,
            } => {
                write!(f, "icons '{first}' and '{second}' both map to symbol '{safe_name}'")
            },
            ValidationError::EmptySafeName { id } => {
                write!(f, "icon '{id}' has an empty symbol name")
            },
            ValidationError::InvalidUnicode { id, value } => {
                write!(f, "icon '{id}' has invalid unicode codepoint '{value}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a loaded icon list for symbol collisions and malformed codepoints.
///
/// All findings are returned; an empty vector means the set is clean.
///
/// ```
/// use fontawesome_data::{IconDef, IconEntry, ValidationError, validate_icons};
///
/// let def = IconDef { unicode: "f26e".into(), ..IconDef::default() };
/// let icons = vec![
///     IconEntry::new("bath", def.clone()),
///     IconEntry::new("Bath", def),
/// ];
/// let errors = validate_icons(&icons);
/// assert!(matches!(errors.as_slice(), [ValidationError::DuplicateSafeName { .. }]));
/// ```
pub fn validate_icons(icons: &[IconEntry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for icon in icons {
        if icon.safe_name().is_empty() {
            errors.push(ValidationError::EmptySafeName {
                id: icon.id().to_string(),
            });
        } else if let Some(first) = seen.get(icon.safe_name()) {
            errors.push(ValidationError::DuplicateSafeName {
                safe_name: icon.safe_name().to_string(),
                first: (*first).to_string(),
                second: icon.id().to_string(),
            });
        } else {
            seen.insert(icon.safe_name(), icon.id());
        }

        if !is_codepoint(&icon.unicode) {
            errors.push(ValidationError::InvalidUnicode {
                id: icon.id().to_string(),
                value: icon.unicode.clone(),
            });
        }
    }

    errors
}

fn is_codepoint(value: &str) -> bool {
    (1..=6).contains(&value.len()) && value.chars().all(|ch| ch.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IconDef;

    fn icon(id: &str, unicode: &str) -> IconEntry {
        IconEntry::new(
            id,
            IconDef {
                unicode: unicode.into(),
                ..IconDef::default()
            },
        )
    }

    #[test]
    fn clean_set_has_no_errors() {
        let icons = vec![icon("hand-rock", "f255"), icon("circle-o", "f10c"), icon("1", "31")];
        assert!(validate_icons(&icons).is_empty());
    }

    #[test]
    fn detects_symbol_collision() {
        let icons = vec![icon("hand-rock", "f255"), icon("hand-rock-o", "f256"), icon("Hand-Rock", "f257")];
        let errors = validate_icons(&icons);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateSafeName {
                safe_name: "HandRock".into(),
                first: "hand-rock".into(),
                second: "Hand-Rock".into(),
            }]
        );
    }

    #[test]
    fn detects_empty_symbol() {
        let errors = validate_icons(&[icon("(x)&&", "f000")]);
        assert_eq!(errors, vec![ValidationError::EmptySafeName { id: "(x)&&".into() }]);
    }

    #[test]
    fn detects_bad_codepoints() {
        let icons = vec![icon("a", ""), icon("b", "zz12"), icon("c", "1f4a9ab")];
        let errors = validate_icons(&icons);
        assert_eq!(errors.len(), 3);
        assert!(
            errors
                .iter()
                .all(|err| matches!(err, ValidationError::InvalidUnicode { .. }))
        );
    }

    #[test]
    fn display_names_both_icons() {
        let err = ValidationError::DuplicateSafeName {
            safe_name: "Bath".into(),
            first: "bath".into(),
            second: "Bath".into(),
        };
        assert_eq!(err.to_string(), "icons 'bath' and 'Bath' both map to symbol 'Bath'");
    }
}
