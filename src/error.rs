// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Dataset Error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Language Error: could not load '{code}': {reason}")]
    Language { code: String, reason: String },

    #[error("View Error: {0}")]
    View(String),

    #[error("timeline is not ready")]
    NotReady,
}

/// Problems found while accepting a dataset or its options.
///
/// These accumulate on the [`Dataset`](crate::domain::dataset::Dataset) error
/// log rather than aborting on the first one, so every problem can be shown
/// to the user at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Two items share the same identifier.
    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    /// Neither a title nor any event was supplied.
    #[error("timeline has no items")]
    EmptyTimeline,

    /// An event was supplied without a start date.
    #[error("event has no start date: {0}")]
    MissingStartDate(String),

    /// An integer-typed option held a non-integer value.
    #[error("invalid integer option: {0}")]
    InvalidIntegerOption(String),

    /// A color option could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl DatasetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DatasetError::DuplicateId(_) => "error-duplicate-id",
            DatasetError::EmptyTimeline => "error-empty-timeline",
            DatasetError::MissingStartDate(_) => "error-missing-start-date",
            DatasetError::InvalidIntegerOption(_) => "error-invalid-integer-option",
            DatasetError::InvalidColor(_) => "error-invalid-color",
        }
    }

    /// Returns the detail shown in brackets after the translated message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DatasetError::DuplicateId(d)
            | DatasetError::MissingStartDate(d)
            | DatasetError::InvalidIntegerOption(d)
            | DatasetError::InvalidColor(d) => Some(d),
            DatasetError::EmptyTimeline => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
