//! `tomcat-users` 配置中的凭据提取能力。

use hostprobe_core::{Credential, Outcome};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use crate::error::{FileSystemError, Result};
use crate::file_io;

const TOMCAT_USERS: &str = "tomcat-users";
const USER: &str = "user";
const USERNAME: &str = "username";
const PASSWORD: &str = "password";

/// 解析 `tomcat-users` XML 文本，按文档顺序返回全部凭据。
///
/// 任意一个 `<user>` 缺少 `username` 或 `password` 时立即失败，不返回部分结果。
/// `DOCTYPE` 声明会被接受并忽略。
pub fn parse(xml: &str) -> Result<Vec<Credential>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(xml, options)?;
    let root = document.root_element();

    // 只比较本地名：任意命名空间或前缀下的 `tomcat-users`/`user` 都会被接受。
    if root.tag_name().name() != TOMCAT_USERS {
        return Err(FileSystemError::MissingNode(TOMCAT_USERS));
    }

    root.children()
        .filter(|node| node.is_element() && node.tag_name().name() == USER)
        .map(|user| credential_from(&document, user))
        .collect()
}

/// 读取并解析磁盘上的 `tomcat-users` 文件。
pub fn parse_file(file_path: &str) -> Result<Vec<Credential>> {
    let xml = file_io::read_text(file_path)?;
    let credentials = parse(&xml)?;
    debug!(path = %file_path, count = credentials.len(), "Parsed tomcat users");
    Ok(credentials)
}

fn credential_from(document: &Document<'_>, user: Node<'_, '_>) -> Result<Credential> {
    let attribute = |name: &'static str| {
        user.attribute(name)
            .ok_or_else(|| FileSystemError::MissingAttribute {
                attribute: name,
                position: document.text_pos_at(user.range().start),
            })
    };

    Ok(Credential::new(attribute(USERNAME)?, attribute(PASSWORD)?))
}

/// 解析凭据，成功时按文档顺序追加到 `credentials`。
///
/// 失败时 `credentials` 保持不变。
pub fn parse_credentials(xml: &str, credentials: &mut Vec<Credential>) -> Outcome {
    append_on_success(parse(xml), credentials)
}

/// 读取文件并解析凭据。读取失败时原样返回 [`file_io::read_file`] 的结果。
pub fn parse_credentials_from_file(
    file_path: &str,
    credentials: &mut Vec<Credential>,
) -> Outcome {
    append_on_success(parse_file(file_path), credentials)
}

fn append_on_success(
    parsed: Result<Vec<Credential>>,
    credentials: &mut Vec<Credential>,
) -> Outcome {
    match parsed {
        Ok(found) => {
            credentials.extend(found);
            Outcome::ok()
        }
        Err(err) => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_USERS: &str = r#"<tomcat-users>
  <user username="alice" password="secret1"/>
  <user username="bob"   password="secret2"/>
</tomcat-users>"#;

    #[test]
    fn test_parse_two_users_in_order() {
        let mut credentials = Vec::new();

        assert_eq!(parse_credentials(TWO_USERS, &mut credentials), Outcome::ok());
        assert_eq!(
            credentials,
            vec![
                Credential::new("alice", "secret1"),
                Credential::new("bob", "secret2"),
            ]
        );
    }

    #[test]
    fn test_other_structure_is_ignored() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<tomcat-users xmlns="http://tomcat.apache.org/xml" version="1.0">
  <!-- managers -->
  <role rolename="manager-gui"/>
  <user username="admin" password="admin" roles="manager-gui"/>
  <user username="admin" password="admin"/>
</tomcat-users>"#;

        let credentials = parse(xml).expect("document should parse");
        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials[0], credentials[1]);
    }

    #[test]
    fn test_malformed_xml_fails_without_credentials() {
        let mut credentials = Vec::new();

        let outcome = parse_credentials("<tomcat-users><user username=\"a\">", &mut credentials);
        assert_eq!(outcome.code(), 1);
        assert!(!outcome.message().is_empty());
        assert!(credentials.is_empty());
    }

    #[test]
    fn test_missing_password_discards_earlier_users() {
        let xml = r#"<tomcat-users>
  <user username="alice" password="secret1"/>
  <user username="mallory"/>
</tomcat-users>"#;
        let mut credentials = Vec::new();

        let outcome = parse_credentials(xml, &mut credentials);
        assert!(outcome.is_err());
        assert_eq!(
            outcome.message(),
            "No such attribute (password) on <user> element at 3:3"
        );
        assert!(credentials.is_empty());
    }

    #[test]
    fn test_wrong_root_element_fails() {
        let err = parse("<server><user username=\"a\" password=\"b\"/></server>")
            .expect_err("root must be tomcat-users");

        assert_eq!(err.to_string(), "No such node (tomcat-users)");
    }

    #[test]
    fn test_doctype_is_ignored() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE tomcat-users>
<tomcat-users><user username="alice" password="secret1"/></tomcat-users>"#;
        let mut credentials = Vec::new();

        assert_eq!(parse_credentials(xml, &mut credentials), Outcome::ok());
        assert_eq!(credentials, vec![Credential::new("alice", "secret1")]);
    }

    #[test]
    fn test_prefixed_elements_match_by_local_name() {
        let xml = r#"<t:tomcat-users xmlns:t="http://tomcat.apache.org/xml">
  <t:user username="alice" password="secret1"/>
</t:tomcat-users>"#;

        let credentials = parse(xml).expect("prefixed document should parse");
        assert_eq!(credentials, vec![Credential::new("alice", "secret1")]);
    }

    #[test]
    fn test_empty_users_list() {
        assert!(parse("<tomcat-users/>").expect("empty list").is_empty());
    }
}
