use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// Display name of a university as rendered in its listing link. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct InstitutionName(String);

impl<'de> serde::Deserialize<'de> for InstitutionName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let str = String::deserialize(deserializer)?;
        Self::new(&str).ok_or_else(|| serde::de::Error::custom("institution name is empty"))
    }
}

impl InstitutionName {
    /// Trims surrounding whitespace and returns `None` if nothing is left.
    /// Whitespace inside the name is kept as rendered.
    pub fn new(text: &str) -> Option<Self> {
        let name = text.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for InstitutionName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for InstitutionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for InstitutionName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
