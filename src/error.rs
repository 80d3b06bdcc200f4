use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadFromStandardInput(std::io::Error),
    FailedToWriteEncodedOutput(std::io::Error),
    Coding(CodingError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadFromStandardInput(error) => {
                write!(f, "Failed to read text from standard input: {}", error)
            }
            Self::FailedToWriteEncodedOutput(error) => {
                write!(f, "Failed to write encoded output: {}", error)
            }
            Self::Coding(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {}

impl From<CodingError> for Error {
    fn from(error: CodingError) -> Self {
        Error::Coding(error)
    }
}
