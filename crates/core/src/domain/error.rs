use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid file mode: {0:#o}. mode must be in [0o0, 0o7777]")]
    InvalidFileMode(u32),
}
