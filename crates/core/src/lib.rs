//! Value types shared by the filesystem capability layer and its hosts.

pub mod domain;

pub use domain::{Credential, DomainError, FileMode, Outcome, PathPresence};
