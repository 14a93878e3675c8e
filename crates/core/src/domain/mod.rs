mod credential;
mod error;
mod file_mode;
mod outcome;
mod presence;

pub use credential::Credential;
pub use error::DomainError;
pub use file_mode::FileMode;
pub use outcome::Outcome;
pub use presence::PathPresence;
