use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("{0} cannot be read as a structure")]
    UnsupportedReadFormat(Format),

    #[error("{0} is not a report format")]
    UnsupportedWriteFormat(Format),

    /// The structure parser rejected the input.
    #[error("failed to parse structure: {0}")]
    StructureParse(String),

    /// Solvent or residue removal failed after parsing.
    #[error("structure cleaning failed: {0}")]
    Clean(String),

    #[error("failed to serialize contact report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<bio_forge::io::Error> for Error {
    fn from(e: bio_forge::io::Error) -> Self {
        Error::StructureParse(e.to_string())
    }
}

impl From<bio_forge::ops::Error> for Error {
    fn from(e: bio_forge::ops::Error) -> Self {
        Error::Clean(e.to_string())
    }
}
