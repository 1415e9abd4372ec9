use crate::font::FontName;
use crate::scene::HostError;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("font {0} could not be loaded")]
    FontLoad(FontName),

    #[error("node {node}: missing field `{field}`")]
    MissingField { node: String, field: &'static str },

    #[error("node {node}: invalid field `{field}`: {source}")]
    InvalidField {
        node: String,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("host error: {0}")]
    Host(HostError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HostError> for Error {
    fn from(err: HostError) -> Self {
        match err {
            HostError::FontUnavailable(font) => Error::FontLoad(font),
            err => Error::Host(err),
        }
    }
}
