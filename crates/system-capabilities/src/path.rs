//! 路径检查能力。
//!
//! 存在性、可读、可写与目录判定。可读/可写检查针对当前有效用户。

use std::path::Path;

use hostprobe_core::{Outcome, PathPresence};
use nix::unistd::{AccessFlags, access};
use tracing::debug;

use crate::error::{FileSystemError, Result, to_outcome};

/// 探测路径的三态存在性。
pub fn probe(path: &str) -> PathPresence {
    if path.is_empty() {
        PathPresence::EmptyPath
    } else if Path::new(path).exists() {
        PathPresence::Exists
    } else {
        PathPresence::NotFound
    }
}

/// 要求路径存在。
pub fn ensure_exists(path: &str) -> Result<()> {
    match probe(path) {
        PathPresence::Exists => Ok(()),
        PathPresence::EmptyPath => Err(FileSystemError::EmptyPath),
        PathPresence::NotFound => Err(FileSystemError::PathNotFound(path.to_string())),
    }
}

/// 要求路径存在且当前用户可读。
pub fn ensure_readable(path: &str) -> Result<()> {
    ensure_exists(path)?;
    access(path, AccessFlags::R_OK).map_err(|_| FileSystemError::NotReadable)
}

/// 要求路径存在且当前用户可写。
pub fn ensure_writable(path: &str) -> Result<()> {
    ensure_exists(path)?;
    access(path, AccessFlags::W_OK).map_err(|_| FileSystemError::NotWritable)
}

/// 要求路径为目录。不存在的路径同样视为"不是目录"。
pub fn ensure_directory(path: &str) -> Result<()> {
    if Path::new(path).is_dir() {
        Ok(())
    } else {
        Err(FileSystemError::NotADirectory)
    }
}

/// 路径的父目录；没有父目录时为空字符串。
pub fn parent_directory(path: &str) -> String {
    Path::new(path)
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// 检查路径是否存在。
///
/// 成功时消息为 `"1"`；路径为空时失败消息为 `"-1"`，不存在时为 `"0"`。
pub fn path_exists(path: &str) -> Outcome {
    let presence = probe(path);
    debug!(path = %path, ?presence, "Probed path");
    presence.into()
}

/// 检查路径是否可读。路径不存在时原样返回 [`path_exists`] 的结果。
pub fn is_readable(path: &str) -> Outcome {
    to_outcome(ensure_readable(path))
}

/// 检查路径是否可写。路径不存在时原样返回 [`path_exists`] 的结果。
pub fn is_writable(path: &str) -> Outcome {
    to_outcome(ensure_writable(path))
}

/// 检查路径是否为目录。
pub fn is_directory(path: &str) -> Outcome {
    to_outcome(ensure_directory(path))
}

/// 获取路径所在目录。
///
/// 若 `path` 不是目录，返回成功并把 `dirpath` 设为其父目录。
/// 若 `path` 本身是目录，返回失败，但 `dirpath` 仍被设为 `path`：
/// 两个分支都会写入 `dirpath`，调用方可以依赖失败时的取值。
pub fn get_directory(path: &str, dirpath: &mut String) -> Outcome {
    match ensure_directory(path) {
        Err(_) => {
            *dirpath = parent_directory(path);
            Outcome::ok()
        }
        Ok(()) => {
            *dirpath = path.to_string();
            FileSystemError::IsADirectory.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_probe_tri_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let existing = dir.path().display().to_string();
        let missing = dir.path().join("missing").display().to_string();

        assert_eq!(probe(""), PathPresence::EmptyPath);
        assert_eq!(probe(&missing), PathPresence::NotFound);
        assert_eq!(probe(&existing), PathPresence::Exists);
    }

    #[test]
    fn test_readable_propagates_existence_failure() {
        let empty = is_readable("");
        assert_eq!(empty, path_exists(""));
        assert_eq!(empty.message(), "-1");

        let missing = is_writable("/definitely/missing/path");
        assert_eq!(missing.code(), 1);
        assert_eq!(missing.message(), "0");
    }

    #[test]
    fn test_readable_and_writable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("plain.txt");
        fs::write(&file, "data").expect("write fixture");
        let file = file.display().to_string();

        assert_eq!(is_readable(&file), Outcome::ok());
        assert_eq!(is_writable(&file), Outcome::ok());
    }

    #[test]
    fn test_is_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("plain.txt");
        fs::write(&file, "data").expect("write fixture");

        assert!(is_directory(&dir.path().display().to_string()).is_ok());

        let outcome = is_directory(&file.display().to_string());
        assert!(outcome.is_err());
        assert_eq!(outcome.message(), "Path is not a directory");

        assert!(is_directory("/definitely/missing/path").is_err());
    }

    #[test]
    fn test_parent_directory_edges() {
        assert_eq!(parent_directory("/var/log/syslog"), "/var/log");
        assert_eq!(parent_directory("relative.txt"), "");
        assert_eq!(parent_directory("/"), "");
    }
}
