use crate::policy_engine::domain::{Component, LicenseClaim};
use crate::shared::error::ClearbomError;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// Subset of a CycloneDX component that the policy engine reads
#[derive(Debug, Deserialize)]
struct RawComponent {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    licenses: Option<Vec<RawLicenseChoice>>,
}

/// One entry of `components[].licenses[]`
#[derive(Debug, Deserialize)]
struct RawLicenseChoice {
    #[serde(default)]
    license: Option<RawLicense>,
    #[serde(default)]
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLicense {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl From<RawLicenseChoice> for LicenseClaim {
    fn from(choice: RawLicenseChoice) -> Self {
        match (choice.license, choice.expression) {
            (Some(license), _) => LicenseClaim::License {
                id: license.id,
                name: license.name,
            },
            (None, Some(expression)) => LicenseClaim::Expression(expression),
            (None, None) => LicenseClaim::License {
                id: None,
                name: None,
            },
        }
    }
}

impl From<RawComponent> for Component {
    fn from(raw: RawComponent) -> Self {
        let licenses = raw
            .licenses
            .unwrap_or_default()
            .into_iter()
            .map(LicenseClaim::from)
            .collect();
        Component::new(raw.name, raw.version, licenses)
    }
}

/// CycloneDxParser - decodes a CycloneDX JSON document into components
///
/// Only `components[].name`, `components[].version` and
/// `components[].licenses[]` are read; every other field is ignored. A
/// missing (or null) `components` key yields an empty list.
pub struct CycloneDxParser;

impl CycloneDxParser {
    /// Parses SBOM text
    ///
    /// # Errors
    /// Returns `MalformedSbom` (with an empty path) when the text is not JSON,
    /// the root is not an object, `components` is not an array, or a component
    /// lacks a string `name`.
    pub fn parse(content: &str) -> Result<Vec<Component>, ClearbomError> {
        let document: Value =
            serde_json::from_str(content).map_err(|e| malformed(format!("invalid JSON: {}", e)))?;

        let Value::Object(mut root) = document else {
            return Err(malformed(
                "document root must be a JSON object".to_string(),
            ));
        };

        let entries = match root.remove("components") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(malformed("'components' must be an array".to_string())),
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<RawComponent>(entry)
                    .map(Component::from)
                    .map_err(|e| malformed(format!("components[{}]: {}", index, e)))
            })
            .collect()
    }
}

fn malformed(details: String) -> ClearbomError {
    ClearbomError::MalformedSbom {
        path: PathBuf::new(),
        details,
    }
}
