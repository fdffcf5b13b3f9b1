//! Typed errors for the library layer.
//!
//! Library modules return [`LibraryError`] so callers can react to each
//! failure individually (keep a form open, refuse a spin, discard an import).
//! Persistence and the binary entry point wrap everything in `anyhow`.

/// Result alias used by the library operations.
pub type Result<T> = std::result::Result<T, LibraryError>;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// A required text field was left blank.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Roulette requested with nothing to pick from.
    #[error("Add some games before spinning the roulette.")]
    EmptyPool,

    /// Spins are serialized; the running one must finish first.
    #[error("A spin is already in progress.")]
    SpinInProgress,

    /// Import file was not a JSON list of games.
    #[error("Could not import games, the file is not a valid game list: {0}")]
    ImportParse(serde_json::Error),

    /// Import file listed the same id more than once.
    #[error("Could not import games, id {0:?} appears more than once.")]
    DuplicateId(String),

    #[error("Game {0:?} not found.")]
    NotFound(String),
}

/// Required fields of the add/edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Description,
    AddedBy,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "Name",
            RequiredField::Description => "Description",
            RequiredField::AddedBy => "Added by",
        }
    }
}

/// Structured validation result listing every blank required field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in the required fields: {}.", labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_fields() {
        let err = ValidationError {
            missing: vec![RequiredField::Name, RequiredField::AddedBy],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in the required fields: Name, Added by."
        );
    }

    #[test]
    fn validation_converts_into_library_error() {
        let err: LibraryError = ValidationError {
            missing: vec![RequiredField::Description],
        }
        .into();
        assert!(matches!(err, LibraryError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Please fill in the required fields: Description."
        );
    }
}
