use std::fmt;

/// Opaque account holder identifier. Not validated against any registry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        return Self(id.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        return Self::new(id);
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
