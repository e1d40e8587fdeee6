//! Error type for theme construction.

/// Errors that can occur while deriving a theme.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The seed color was not a parsable hex color.
    #[error("invalid seed color `{0}`")]
    InvalidSeed(String),
}
