//! Errors raised by the configuration surfaces of the numeric widgets.
//!
//! Interaction paths (drag, keys, text commit) never fail; anomalies there
//! degrade to a no-op. Only attribute and transform-name parsing is fallible.

use thiserror::Error;

/// An unrecognized transform type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transform type `{name}`{}", did_you_mean(.suggestion))]
pub struct TransformParseError {
    /// The name that failed to parse.
    pub name: String,
    /// The closest known name, if any was reasonably close.
    pub suggestion: Option<&'static str>,
}

/// Errors produced while applying a string attribute to widget props.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("unknown attribute `{name}`{}", did_you_mean(.suggestion))]
    UnknownAttribute {
        name: String,
        suggestion: Option<&'static str>,
    },

    #[error("attribute `{name}` expects a number, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    Transform(#[from] TransformParseError),
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{name}`?)"),
        None => String::new(),
    }
}

/// Minimum Jaro-Winkler similarity for a candidate to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Finds the known name closest to `input`, if it is close enough to be a typo.
pub(crate) fn closest_name(input: &str, known: &[&'static str]) -> Option<&'static str> {
    let input = input.to_ascii_lowercase();
    known
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(&input, candidate)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}
