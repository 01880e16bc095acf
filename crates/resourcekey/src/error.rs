use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("malformed key {key:?}: expected 4 segments, got {segments}")]
    MalformedKey { key: String, segments: usize },
}
pub type Result<T> = std::result::Result<T, Error>;
