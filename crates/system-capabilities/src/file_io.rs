//! 文本文件读写能力。

use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

use hostprobe_core::{FileMode, Outcome};
use tracing::debug;

use crate::error::{FileSystemError, Result, to_outcome};
use crate::path;

/// 以追加模式写入文本，并把文件权限设为 `mode`。
///
/// 文件不存在时以 `mode` 创建；已存在时在末尾追加，不会截断。
pub fn append_text(file_path: &str, content: &str, mode: FileMode) -> Result<()> {
    debug!(path = %file_path, mode = %mode, bytes = content.len(), "Appending to file");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(mode.bits())
        .open(file_path)
        .map_err(FileSystemError::CreateFile)?;

    // 文件可能先以其他权限存在，这里统一收紧到请求的权限。
    fs::set_permissions(file_path, Permissions::from_mode(mode.bits()))
        .map_err(FileSystemError::ChangePermissions)?;

    let expected = content.len();
    let written = file.write(content.as_bytes()).map_err(FileSystemError::Write)?;
    if written != expected {
        return Err(FileSystemError::ShortWrite { written, expected });
    }

    Ok(())
}

/// 读取整个文件的字节内容。
///
/// 先检查存在性，再按文件末尾偏移量分配恰好大小的缓冲区一次读满。
pub fn read_bytes(file_path: &str) -> Result<Vec<u8>> {
    path::ensure_exists(file_path)?;
    debug!(path = %file_path, "Reading file");

    let mut file = File::open(file_path).map_err(FileSystemError::OpenForRead)?;
    let is_dir = file
        .metadata()
        .map_err(FileSystemError::OpenForRead)?
        .is_dir();
    if is_dir {
        return Err(FileSystemError::OpenForRead(io::Error::from(
            io::ErrorKind::IsADirectory,
        )));
    }

    let len = file
        .seek(SeekFrom::End(0))
        .and_then(|end| file.seek(SeekFrom::Start(0)).map(|_| end))
        .map_err(FileSystemError::ShortRead)?;
    let len = usize::try_from(len).map_err(|err| {
        FileSystemError::ShortRead(io::Error::new(io::ErrorKind::OutOfMemory, err))
    })?;

    let mut buffer = vec![0; len];
    file.read_exact(&mut buffer).map_err(FileSystemError::ShortRead)?;

    Ok(buffer)
}

/// 读取整个文件为 UTF-8 文本。
pub fn read_text(file_path: &str) -> Result<String> {
    Ok(String::from_utf8(read_bytes(file_path)?)?)
}

/// 写入文本文件。
///
/// 以 `permissions` 创建或打开文件并追加 `content`，之后总是把文件权限设为
/// `permissions`。`force_permissions` 目前不影响行为：无论取值如何都会强制设置权限。
pub fn write_text_file(
    file_path: &str,
    content: &str,
    permissions: FileMode,
    _force_permissions: bool,
) -> Outcome {
    to_outcome(append_text(file_path, content, permissions))
}

/// 读取文件内容。
///
/// 路径不存在时原样返回 [`path::path_exists`] 的结果。成功时 `content` 被替换为文件内容，
/// 失败时保持不变。
///
/// 文件内容不是合法 UTF-8 时失败，消息为 `"File contents are not valid UTF-8"`；
/// 需要原始字节时使用 [`read_bytes`]。
pub fn read_file(file_path: &str, content: &mut String) -> Outcome {
    match read_text(file_path) {
        Ok(text) => {
            *content = text;
            Outcome::ok()
        }
        Err(err) => err.into(),
    }
}
