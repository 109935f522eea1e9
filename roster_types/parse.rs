use thiserror::Error;

/// A closed-set value coming from the outside world didn't match any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
