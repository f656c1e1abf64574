use std::fmt;
use std::str::FromStr;

use super::storage_path::StoragePath;

/// Fully-qualified reference to an object a provider can read, in
/// `scheme://bucket/key` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUri {
    scheme: String,
    bucket: String,
    key: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RemoteUriError {
    #[error("missing scheme separator in '{0}'")]
    MissingScheme(String),
    #[error("missing bucket in '{0}'")]
    MissingBucket(String),
    #[error("missing object key in '{0}'")]
    MissingKey(String),
}

impl RemoteUri {
    pub fn new(scheme: &str, bucket: &str, key: &StoragePath) -> Self {
        Self {
            scheme: scheme.to_string(),
            bucket: bucket.to_string(),
            key: key.as_str().to_string(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, RemoteUriError> {
        let (scheme, rest) = raw
            .split_once("://")
            .filter(|(scheme, _)| !scheme.is_empty())
            .ok_or_else(|| RemoteUriError::MissingScheme(raw.to_string()))?;

        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(RemoteUriError::MissingBucket(raw.to_string()));
        }
        if key.is_empty() {
            return Err(RemoteUriError::MissingKey(raw.to_string()));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> StoragePath {
        StoragePath::from_raw(self.key.clone())
    }
}

impl FromStr for RemoteUri {
    type Err = RemoteUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RemoteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.scheme, self.bucket, self.key)
    }
}
