use super::exclude_pattern::ExcludePattern;
use crate::shared::error::ClearbomError;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Schema version assumed when the document does not declare one
pub const DEFAULT_POLICY_VERSION: u32 = 1;

/// Maximum number of component exclusion patterns
pub const MAX_EXCLUDE_PATTERNS: usize = 64;

/// What to do with components that declare no license at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAction {
    Allow,
    Deny,
    #[default]
    Warn,
}

/// Raw policy document exactly as deserialized from YAML
///
/// Nothing here is validated yet; convert with [`Policy::from_document`].
/// Unknown top-level keys are kept so they can be reported back to the user
/// instead of being silently dropped.
#[derive(Debug, Default, Deserialize)]
pub struct PolicyDocument {
    pub version: Option<u32>,
    pub licenses: Option<LicensesSection>,
    pub components: Option<ComponentsSection>,
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// `licenses:` section of the policy document
#[derive(Debug, Default, Deserialize)]
pub struct LicensesSection {
    pub allow: Option<Vec<String>>,
    pub warn: Option<Vec<String>>,
    pub deny: Option<Vec<String>>,
    #[serde(default)]
    pub unknown_action: UnknownAction,
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// `components:` section of the policy document
#[derive(Debug, Default, Deserialize)]
pub struct ComponentsSection {
    pub exclude: Option<Vec<String>>,
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Validated license rules
///
/// The three lists are independent sets; one identifier may sit in several
/// of them, and the evaluator resolves the overlap (deny wins).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LicenseRules {
    allow: BTreeSet<String>,
    warn: BTreeSet<String>,
    deny: BTreeSet<String>,
    unknown_action: UnknownAction,
}

impl LicenseRules {
    pub fn new(
        allow: BTreeSet<String>,
        warn: BTreeSet<String>,
        deny: BTreeSet<String>,
        unknown_action: UnknownAction,
    ) -> Self {
        Self {
            allow,
            warn,
            deny,
            unknown_action,
        }
    }

    pub fn is_denied(&self, license_id: &str) -> bool {
        self.deny.contains(license_id)
    }

    pub fn is_warned(&self, license_id: &str) -> bool {
        self.warn.contains(license_id)
    }

    /// An empty allow list means "no allow-list enforcement"
    pub fn has_allow_list(&self) -> bool {
        !self.allow.is_empty()
    }

    pub fn is_allowed(&self, license_id: &str) -> bool {
        self.allow.contains(license_id)
    }

    pub fn unknown_action(&self) -> UnknownAction {
        self.unknown_action
    }

    pub fn allow(&self) -> &BTreeSet<String> {
        &self.allow
    }

    pub fn warn(&self) -> &BTreeSet<String> {
        &self.warn
    }

    pub fn deny(&self) -> &BTreeSet<String> {
        &self.deny
    }
}

/// Policy aggregate - an always-valid license policy
///
/// Built by [`Policy::from_document`] or [`Policy::from_yaml_str`]; the
/// evaluator takes it as-is and never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    version: u32,
    licenses: Option<LicenseRules>,
    exclude: Vec<ExcludePattern>,
    ignored_fields: Vec<String>,
}

impl Policy {
    /// Policy without any constraints, equivalent to an empty document
    pub fn unrestricted() -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION,
            licenses: None,
            exclude: Vec::new(),
            ignored_fields: Vec::new(),
        }
    }

    /// Validates a raw document into a policy
    ///
    /// # Errors
    /// Returns [`ClearbomError::InvalidPolicy`] (with an empty path; readers
    /// attach the real one) when a license list contains a blank entry or an
    /// exclusion pattern is invalid.
    ///
    /// Unknown keys, top-level or nested, are recorded as ignored fields
    /// (`owner`, `licenses.review`) rather than rejected.
    pub fn from_document(document: PolicyDocument) -> Result<Self, ClearbomError> {
        let version = document.version.unwrap_or(DEFAULT_POLICY_VERSION);
        let mut ignored_fields: Vec<String> = document.unknown_fields.into_keys().collect();

        let licenses = document
            .licenses
            .map(|section| -> Result<LicenseRules, ClearbomError> {
                ignored_fields.extend(
                    section
                        .unknown_fields
                        .into_keys()
                        .map(|key| format!("licenses.{}", key)),
                );
                Ok(LicenseRules::new(
                    collect_license_list("licenses.allow", section.allow)?,
                    collect_license_list("licenses.warn", section.warn)?,
                    collect_license_list("licenses.deny", section.deny)?,
                    section.unknown_action,
                ))
            })
            .transpose()?;

        let raw_patterns = match document.components {
            Some(section) => {
                ignored_fields.extend(
                    section
                        .unknown_fields
                        .into_keys()
                        .map(|key| format!("components.{}", key)),
                );
                section.exclude.unwrap_or_default()
            }
            None => Vec::new(),
        };
        if raw_patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(invalid(format!(
                "components.exclude: too many exclusion patterns: {} (maximum: {})",
                raw_patterns.len(),
                MAX_EXCLUDE_PATTERNS
            )));
        }
        let exclude = raw_patterns
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                ExcludePattern::new(raw)
                    .map_err(|reason| invalid(format!("components.exclude[{}]: {}", i, reason)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version,
            licenses,
            exclude,
            ignored_fields,
        })
    }

    /// Parses and validates a YAML policy document
    ///
    /// An empty document is invalid; "no policy" means no file at all.
    pub fn from_yaml_str(content: &str) -> Result<Self, ClearbomError> {
        let value: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?;

        if value.is_null() {
            return Err(invalid(
                "policy document is empty; expected a mapping".to_string(),
            ));
        }

        let document: PolicyDocument =
            serde_yaml_ng::from_value(value).map_err(|e| invalid(e.to_string()))?;

        Self::from_document(document)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// License rules, or `None` when the policy imposes no license constraints
    pub fn licenses(&self) -> Option<&LicenseRules> {
        self.licenses.as_ref()
    }

    pub fn exclude_patterns(&self) -> &[ExcludePattern] {
        &self.exclude
    }

    /// Keys that were present in the document but not understood, dotted for
    /// nested sections
    pub fn ignored_fields(&self) -> &[String] {
        &self.ignored_fields
    }
}

fn invalid(details: String) -> ClearbomError {
    ClearbomError::InvalidPolicy {
        path: PathBuf::new(),
        details,
    }
}

fn collect_license_list(
    field: &str,
    entries: Option<Vec<String>>,
) -> Result<BTreeSet<String>, ClearbomError> {
    let entries = entries.unwrap_or_default();
    if let Some(i) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(invalid(format!(
            "{}[{}]: license identifier must not be empty",
            field, i
        )));
    }
    Ok(entries.into_iter().collect())
}
