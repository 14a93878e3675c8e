//! 文件系统能力错误类型。
//!
//! 每个变体的 `Display` 文本即调用方在 [`Outcome`] 中看到的消息，
//! 存在性相关的两个变体例外，它们映射为三态标记。

use std::io;
use std::string::FromUtf8Error;

use hostprobe_core::{Outcome, PathPresence};
use thiserror::Error;

/// 文件系统错误类型。
#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("路径为空")]
    EmptyPath,

    #[error("路径不存在: {0}")]
    PathNotFound(String),

    #[error("Path is not readable.")]
    NotReadable,

    #[error("Path is not writable.")]
    NotWritable,

    #[error("Path is not a directory")]
    NotADirectory,

    #[error("Path is a directory")]
    IsADirectory,

    #[error("Could not create file")]
    CreateFile(#[source] io::Error),

    #[error("Failed to change permissions")]
    ChangePermissions(#[source] io::Error),

    #[error("Failed to write contents")]
    ShortWrite { written: usize, expected: usize },

    #[error("Failed to write contents")]
    Write(#[source] io::Error),

    #[error("Could not open file for reading")]
    OpenForRead(#[source] io::Error),

    #[error("Could not read file")]
    ShortRead(#[source] io::Error),

    #[error("File contents are not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("Directory not found")]
    DirectoryNotFound,

    #[error("Supplied path is not a directory")]
    SuppliedPathNotDirectory,

    #[error("{0}")]
    DirectoryIteration(#[from] walkdir::Error),

    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(String),

    #[error("{0}")]
    MalformedXml(#[from] roxmltree::Error),

    #[error("No such node ({0})")]
    MissingNode(&'static str),

    #[error("No such attribute ({attribute}) on <user> element at {position}")]
    MissingAttribute {
        attribute: &'static str,
        position: roxmltree::TextPos,
    },
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

impl FileSystemError {
    /// 该错误对应的存在性结果；非存在性错误返回 `None`。
    pub fn presence(&self) -> Option<PathPresence> {
        match self {
            Self::EmptyPath => Some(PathPresence::EmptyPath),
            Self::PathNotFound(_) => Some(PathPresence::NotFound),
            _ => None,
        }
    }
}

impl From<FileSystemError> for Outcome {
    fn from(err: FileSystemError) -> Self {
        match err.presence() {
            Some(presence) => presence.into(),
            None => Outcome::failure(err.to_string()),
        }
    }
}

/// 将无返回值的结果转换为 [`Outcome`]，成功时消息为 `"OK"`。
pub(crate) fn to_outcome(result: Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::ok(),
        Err(err) => err.into(),
    }
}
