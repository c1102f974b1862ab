use crate::shared::Result;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Maximum length for package names (NuGet limits ids to 100 characters; allow headroom)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a package id with case-insensitive identity
///
/// The first-seen spelling is kept for display, while equality, hashing and
/// ordering use the lower-cased key, so `Newtonsoft.Json` and `newtonsoft.json`
/// are the same package.
#[derive(Debug, Clone)]
pub struct PackageName {
    display: String,
    key: String,
}

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        let key = name.to_lowercase();
        Ok(Self { display: name, key })
    }

    /// The spelling this name was created with
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The normalized identity key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive comparison against a raw string
    pub fn matches(&self, other: &str) -> bool {
        self.key == other.to_lowercase()
    }
}

impl PartialEq for PackageName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PackageName {}

impl Hash for PackageName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for PackageName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// NewType wrapper for a version string, compared verbatim
///
/// Versions are never parsed: a desired version `[2.0.0, )` and a resolved
/// `2.0.0` differ, exactly as the restore output records them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.trim().is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
