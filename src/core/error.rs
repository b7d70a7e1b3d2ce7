use thiserror::Error;

/// Errors raised while decoding raw input into a tree.
///
/// Encoding itself never fails: absent values are elided, not rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Failed to decode form input: {message}")]
    Decode { message: String },

    #[error("Form input root must be a mapping, found {found}")]
    RootNotMapping { found: &'static str },
}

pub type Result<T> = std::result::Result<T, FormError>;
