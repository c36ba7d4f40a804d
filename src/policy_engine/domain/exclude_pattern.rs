/// Maximum length of a single exclude pattern, in characters
pub const MAX_PATTERN_LENGTH: usize = 255;

/// ExcludePattern value object - a validated component-name wildcard
///
/// `*` matches zero or more characters; everything else matches literally
/// and case-sensitively against the component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
}

impl ExcludePattern {
    /// Validates and compiles a pattern string
    ///
    /// # Errors
    /// Returns a human-readable description when the pattern is empty, too
    /// long, or consists only of wildcards. Any other character is allowed,
    /// since component names are free-form strings.
    pub fn new(pattern: String) -> Result<Self, String> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Checks if a component name matches this pattern
    pub fn matches(&self, component_name: &str) -> bool {
        self.matcher.matches(component_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternMatcher {
    /// "name"
    Exact(String),
    /// "*-suffix"
    EndsWith(String),
    /// "prefix-*"
    StartsWith(String),
    /// "*middle*"
    Contains(String),
    /// "pre*fix*suf" - literal segments split on `*`, anchoring preserved
    Segments {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => name == s,
            PatternMatcher::EndsWith(suffix) => name.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => name.contains(middle.as_str()),
            PatternMatcher::Segments {
                parts,
                anchored_start,
                anchored_end,
            } => segments_match(name, parts, *anchored_start, *anchored_end),
        }
    }
}

fn segments_match(name: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = name;

    for (idx, part) in parts.iter().enumerate() {
        let is_first = idx == 0;
        let is_last = idx + 1 == parts.len();

        if is_first && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(remaining) => rest = remaining,
                None => return false,
            }
            continue;
        }

        if is_last && anchored_end {
            return rest.ends_with(part.as_str());
        }

        match rest.find(part.as_str()) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }

    !anchored_end || rest.is_empty()
}

fn validate_pattern(pattern: &str) -> Result<(), String> {
    if pattern.is_empty() {
        return Err("Exclusion pattern cannot be empty".to_string());
    }

    let length = pattern.chars().count();
    if length > MAX_PATTERN_LENGTH {
        return Err(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern, length, MAX_PATTERN_LENGTH
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return Err(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();
    let starts = pattern.starts_with('*');
    let ends = pattern.ends_with('*');

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 if starts => PatternMatcher::EndsWith(pattern[1..].to_string()),
        1 if ends => PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string()),
        2 if starts && ends && pattern.len() > 2 => {
            PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string())
        }
        _ => PatternMatcher::Segments {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            anchored_start: !starts,
            anchored_end: !ends,
        },
    }
}
