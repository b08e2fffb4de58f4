use thiserror::Error;

use ordbok_core::concept::UnknownConcept;

use super::MAX_HOMOGRAPH;

/// A fatal condition that aborts rendering of one article.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown concept id `{0}`")]
    UnknownConcept(String),

    #[error("homograph number {0} cannot be romanized (maximum is {max})", max = MAX_HOMOGRAPH)]
    RomanizationOverflow(u32),

    #[error("content has {placeholders} placeholder(s) but {items} item(s)")]
    PlaceholderIndexMismatch { placeholders: usize, items: usize },

    #[error("{0}")]
    Serialize(String),
}

impl From<UnknownConcept> for RenderError {
    fn from(err: UnknownConcept) -> Self {
        Self::UnknownConcept(err.id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RenderError::from(UnknownConcept::new("xyz")).to_string(),
            "unknown concept id `xyz`"
        );
        assert_eq!(
            RenderError::RomanizationOverflow(11).to_string(),
            "homograph number 11 cannot be romanized (maximum is 10)"
        );
        assert_eq!(
            RenderError::PlaceholderIndexMismatch {
                placeholders: 2,
                items: 1
            }
            .to_string(),
            "content has 2 placeholder(s) but 1 item(s)"
        );
    }
}
