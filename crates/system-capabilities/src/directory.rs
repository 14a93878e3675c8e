//! 目录浏览能力。只列出直接子项，不递归。

use std::path::{Path, PathBuf};

use hostprobe_core::Outcome;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{FileSystemError, Result};

/// 列出目录的直接子项的完整路径，顺序与操作系统迭代顺序一致。
pub fn entries(dir_path: &str) -> Result<Vec<String>> {
    let dir = Path::new(dir_path);

    if !dir.exists() {
        return Err(FileSystemError::DirectoryNotFound);
    }

    if !dir.is_dir() {
        return Err(FileSystemError::SuppliedPathNotDirectory);
    }

    debug!(path = %dir_path, "Listing directory");

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| -> Result<String> { entry_path(entry?.into_path()) })
        .collect()
}

/// 子项路径必须是合法 UTF-8，否则返回的字符串无法再定位到该文件。
fn entry_path(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| FileSystemError::NonUtf8Path(raw.to_string_lossy().into_owned()))
}

/// 列出目录内容，并把每个子项的完整路径追加到 `results`。
///
/// 迭代中途出错时整个调用失败，`results` 不会被追加部分结果。
pub fn list_files_in_directory(dir_path: &str, results: &mut Vec<String>) -> Outcome {
    match entries(dir_path) {
        Ok(found) => {
            results.extend(found);
            Outcome::ok()
        }
        Err(err) => err.into(),
    }
}
