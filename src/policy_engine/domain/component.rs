/// Version placeholder used in component keys when the SBOM omits one
const UNKNOWN_VERSION: &str = "unknown";

/// A single license assertion attached to a component
///
/// Mirrors the two shapes a CycloneDX `licenses[]` entry can take: a
/// structured `license` object or a free-form SPDX expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseClaim {
    /// `{"license": {"id": .., "name": ..}}`, either field may be missing
    License {
        id: Option<String>,
        name: Option<String>,
    },
    /// `{"expression": "MIT OR Apache-2.0"}`
    Expression(String),
}

impl LicenseClaim {
    /// Claim carrying an SPDX identifier
    pub fn id(id: impl Into<String>) -> Self {
        LicenseClaim::License {
            id: Some(id.into()),
            name: None,
        }
    }

    /// Claim carrying only a free-text license name
    pub fn name(name: impl Into<String>) -> Self {
        LicenseClaim::License {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Claim carrying an SPDX expression
    pub fn expression(expression: impl Into<String>) -> Self {
        LicenseClaim::Expression(expression.into())
    }
}

/// Component entity as read from the SBOM
///
/// Only the fields the policy engine needs are kept. License claims stay in
/// declaration order because extraction always looks at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: Option<String>,
    licenses: Vec<LicenseClaim>,
}

impl Component {
    pub fn new(name: String, version: Option<String>, licenses: Vec<LicenseClaim>) -> Self {
        Self {
            name,
            version,
            licenses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn licenses(&self) -> &[LicenseClaim] {
        &self.licenses
    }

    /// Identity used to attribute violations: `name@version`
    ///
    /// A missing version is rendered as `unknown`.
    pub fn key(&self) -> String {
        format!(
            "{}@{}",
            self.name,
            self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
        )
    }
}
