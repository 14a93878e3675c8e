//! System Capabilities - 文件系统能力封装模块。
//!
//! 为宿主查询引擎提供统一的、带状态码的文件系统访问：路径检查、文本读写、
//! 目录浏览以及 `tomcat-users` 凭据提取。每个操作都返回 [`Outcome`]，
//! 同时提供返回 [`Result`] 的类型化版本。

pub mod config;
pub mod credentials;
pub mod directory;
pub mod error;
pub mod file_io;
pub mod filesystem;
pub mod path;

pub use config::CapabilitiesConfig;
pub use credentials::{parse_credentials, parse_credentials_from_file};
pub use directory::list_files_in_directory;
pub use error::{FileSystemError, Result};
pub use file_io::{read_file, write_text_file};
pub use filesystem::{CredentialScan, FileSystemCapabilities};
pub use hostprobe_core::{Credential, FileMode, Outcome, PathPresence};
pub use path::{get_directory, is_directory, is_readable, is_writable, path_exists};
