use super::Outcome;

/// Result of an existence probe.
///
/// Kept as an enum so nothing branches on message text; the `"-1"`/`"0"`/`"1"`
/// tokens only appear once a presence is turned into an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathPresence {
    EmptyPath,
    NotFound,
    Exists,
}

impl PathPresence {
    pub fn token(self) -> &'static str {
        match self {
            Self::EmptyPath => "-1",
            Self::NotFound => "0",
            Self::Exists => "1",
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Exists)
    }
}

impl From<PathPresence> for Outcome {
    fn from(value: PathPresence) -> Self {
        if value.is_present() {
            Outcome::success(value.token())
        } else {
            Outcome::failure(value.token())
        }
    }
}
