use crate::{Error, ResourceObject, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Separates key fields in canonical form
pub const DELIMITER: char = ':';

/// Identifies object in cluster
///
/// Fields are never escaped, so a key with [`DELIMITER`] in any of them can't be decoded back.
/// Key with all fields empty is the zero key, and stands for "no object".
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey {
    // apps/v1, or just v1 for core group
    pub api_version: String,
    // Deployment
    pub kind: String,
    // Empty for cluster-scoped objects
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Copies identity fields of object as-is
    pub fn from_object<O: ResourceObject + ?Sized>(obj: &O) -> Self {
        Self::new(obj.api_version(), obj.kind(), obj.namespace(), obj.name())
    }

    /// Parse canonical form, produced by [`Display`] implementation
    ///
    /// Empty fields are accepted, so `":::"` decodes to the zero key.
    pub fn decode(key: &str) -> Result<Self> {
        let parts = key.split(DELIMITER).collect::<Vec<_>>();
        match parts.as_slice() {
            &[api_version, kind, namespace, name] => {
                Ok(Self::new(api_version, kind, namespace, name))
            }
            _ => {
                log::trace!("rejecting key {:?} with {} segments", key, parts.len());
                Err(Error::MalformedKey {
                    key: key.to_owned(),
                    segments: parts.len(),
                })
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.api_version.is_empty()
            && self.kind.is_empty()
            && self.namespace.is_empty()
            && self.name.is_empty()
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.api_version,
            self.kind,
            self.namespace,
            self.name,
            d = DELIMITER
        )
    }
}

impl FromStr for ResourceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl<O: ResourceObject + ?Sized> From<&O> for ResourceKey {
    fn from(obj: &O) -> Self {
        Self::from_object(obj)
    }
}

// Persisted as canonical string, which also allows to use keys as json object keys
impl Serialize for ResourceKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::decode(&key).map_err(de::Error::custom)
    }
}
