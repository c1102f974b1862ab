use crate::hierarchy::domain::{PackageName, Version};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Byte order mark some Windows tools prepend to JSON files
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Raw document shape; only the two sections the hierarchy needs
#[derive(Debug, Deserialize)]
struct AssetsDocument {
    project: ProjectSection,
    targets: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ProjectSection {
    frameworks: Map<String, Value>,
}

/// Direct dependencies the project declares for one target framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredFramework {
    pub name: String,
    pub dependencies: Vec<PackageName>,
}

/// One `name/version` entry of a target, with the versions it requests of its
/// own dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name: PackageName,
    pub version: Version,
    pub dependencies: Vec<(PackageName, Version)>,
}

/// All resolved packages of one target framework, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkTarget {
    pub name: String,
    pub packages: Vec<ResolvedPackage>,
}

/// Result of parsing a `project.assets.json` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAssets {
    pub declared: Vec<DeclaredFramework>,
    pub targets: Vec<FrameworkTarget>,
}

impl ParsedAssets {
    /// Whether any target framework of the project declares this package.
    ///
    /// `targets` keys (`.NETCoreApp,Version=v8.0`, optionally with a runtime
    /// suffix) do not match `project.frameworks` keys (`net8.0`), so the union
    /// over all frameworks is used.
    pub fn is_declared(&self, name: &PackageName) -> bool {
        self.declared
            .iter()
            .any(|framework| framework.dependencies.contains(name))
    }

    pub fn declared_names(&self) -> HashSet<&PackageName> {
        self.declared
            .iter()
            .flat_map(|framework| framework.dependencies.iter())
            .collect()
    }

    pub fn package_entry_count(&self) -> usize {
        self.targets.iter().map(|t| t.packages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty() && self.targets.is_empty()
    }
}

/// AssetsParser service extracting declared and resolved packages
///
/// Parsing never fails: content that is not the expected JSON shape yields an
/// empty result, and malformed pieces inside a valid document are skipped one
/// by one.
pub struct AssetsParser;

impl AssetsParser {
    pub fn parse(content: &[u8]) -> ParsedAssets {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let document: AssetsDocument = match serde_json::from_slice(content) {
            Ok(document) => document,
            Err(_) => return ParsedAssets::default(),
        };

        let declared = document
            .project
            .frameworks
            .iter()
            .map(|(name, framework)| DeclaredFramework {
                name: name.clone(),
                dependencies: Self::declared_dependencies(framework),
            })
            .collect();

        let targets = document
            .targets
            .iter()
            .filter_map(|(name, target)| {
                let packages = target
                    .as_object()?
                    .iter()
                    .filter_map(|(id, entry)| Self::resolved_package(id, entry))
                    .collect();
                Some(FrameworkTarget {
                    name: name.clone(),
                    packages,
                })
            })
            .collect();

        ParsedAssets { declared, targets }
    }

    /// Names under `project.frameworks.<fw>.dependencies`; empty when absent
    fn declared_dependencies(framework: &Value) -> Vec<PackageName> {
        let Some(dependencies) = framework.get("dependencies").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut names: Vec<PackageName> = Vec::new();
        for name in dependencies.keys() {
            if let Ok(name) = PackageName::new(name.clone()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Parses one `"Name/1.2.3": { "dependencies": { ... } }` target entry
    fn resolved_package(id: &str, entry: &Value) -> Option<ResolvedPackage> {
        let (name, version) = id.split_once('/')?;
        let name = PackageName::new(name.to_string()).ok()?;
        let version = Version::new(version.to_string()).ok()?;

        let dependencies = entry
            .get("dependencies")
            .and_then(Value::as_object)
            .map(|deps| {
                deps.iter()
                    .filter_map(|(dep_name, desired)| {
                        Some((
                            PackageName::new(dep_name.clone()).ok()?,
                            Version::new(desired.as_str()?.to_string()).ok()?,
                        ))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(ResolvedPackage {
            name,
            version,
            dependencies,
        })
    }
}
