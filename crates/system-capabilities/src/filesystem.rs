//! 文件系统能力句柄。
//!
//! 在各项基础能力之上绑定一份 [`CapabilitiesConfig`]，供宿主持有并按配置调用。

use std::path::PathBuf;

use hostprobe_core::{Credential, Outcome, PathPresence};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CapabilitiesConfig;
use crate::{credentials, file_io, path};

/// 单个候选 `tomcat-users` 文件的扫描结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialScan {
    /// 候选文件路径。
    pub path: String,
    /// 解析结果状态。
    pub outcome: Outcome,
    /// 提取出的凭据；失败时为空。
    pub credentials: Vec<Credential>,
}

/// 文件系统能力接口。
#[derive(Debug, Clone, Default)]
pub struct FileSystemCapabilities {
    config: CapabilitiesConfig,
}

impl FileSystemCapabilities {
    /// 使用默认配置创建实例。
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建实例。
    pub fn with_config(config: CapabilitiesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CapabilitiesConfig {
        &self.config
    }

    /// 以配置中的默认权限追加写入文本文件。
    pub fn write_text_file(&self, file_path: &str, content: &str) -> Outcome {
        file_io::write_text_file(
            file_path,
            content,
            self.config.default_file_mode,
            self.config.force_permissions,
        )
    }

    /// 依次扫描配置中的候选 `tomcat-users` 文件。
    ///
    /// 不存在的候选被跳过；解析失败的候选记录失败状态，扫描继续。
    pub fn scan_tomcat_users(&self) -> Vec<CredentialScan> {
        let mut scans = Vec::new();

        for candidate in &self.config.tomcat_users_paths {
            let candidate = candidate.display().to_string();

            if path::probe(&candidate) != PathPresence::Exists {
                debug!(path = %candidate, "Skipping missing tomcat users file");
                continue;
            }

            let mut found = Vec::new();
            let outcome = credentials::parse_credentials_from_file(&candidate, &mut found);
            scans.push(CredentialScan {
                path: candidate,
                outcome,
                credentials: found,
            });
        }

        info!(
            candidates = self.config.tomcat_users_paths.len(),
            scanned = scans.len(),
            "Scanned tomcat users files"
        );
        scans
    }

    /// 配置中的候选路径。
    pub fn tomcat_users_paths(&self) -> &[PathBuf] {
        &self.config.tomcat_users_paths
    }
}
