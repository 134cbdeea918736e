use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dot-separated fully qualified class name, e.g. `pkg.MainKt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct FqName(String);

impl FqName {
    pub fn new(name: impl Into<String>) -> ApiResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ApiError::InvalidQualifiedName {
                name,
                reason: "name is empty",
            });
        }
        if name.split('.').any(|segment| segment.is_empty()) {
            return Err(ApiError::InvalidQualifiedName {
                name,
                reason: "empty segment",
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ApiError::InvalidQualifiedName {
                name,
                reason: "contains whitespace",
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment, i.e. the simple class name.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Everything before the last segment; empty for the root package.
    pub fn package(&self) -> &str {
        self.0.rfind('.').map_or("", |idx| &self.0[..idx])
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FqName {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FqName {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FqName> for String {
    fn from(value: FqName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        let fqn = FqName::new("org.example.app.MainKt").unwrap();
        assert_eq!(fqn.short_name(), "MainKt");
        assert_eq!(fqn.package(), "org.example.app");

        let root = FqName::new("Main").unwrap();
        assert_eq!(root.short_name(), "Main");
        assert_eq!(root.package(), "");
    }

    #[test]
    fn test_rejects_malformed_names() {
        assert!(FqName::new("").is_err());
        assert!(FqName::new("pkg..Main").is_err());
        assert!(FqName::new("pkg.Main.").is_err());
        assert!(FqName::new("pkg.Ma in").is_err());
        assert!("pkg.Main".parse::<FqName>().is_ok());
    }
}
