use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const TWO_USERS_XML: &str = r#"<tomcat-users>
  <user username="alice" password="secret1"/>
  <user username="bob"   password="secret2"/>
</tomcat-users>
"#;

pub fn workspace() -> TempDir {
    tempfile::tempdir().expect("should create temp dir")
}

pub fn path_string(path: &Path) -> String {
    path.display().to_string()
}

pub fn touch(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("should write fixture file");
    path_string(&path)
}

#[allow(dead_code)]
pub fn running_as_root() -> bool {
    nix::unistd::Uid::effective().is_root()
}
