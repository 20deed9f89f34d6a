//! Dependency line recognition and constraint construction
//!
//! A dependency line looks like:
//!
//! ```text
//!   "<name>[<extras>] >=<low>,<<high>[; <marker>]",
//! ```
//!
//! Anything else is not a dependency line and is left alone.

use crate::domain::Version;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Anchored at the line start only; the package capture is greedy, so the
// constraint starts at the last `>=` that is still followed by `,<`.
static DEPENDENCY_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"(?P<package>.+)\s*(?P<constraints>>=.+,<.+)\s*""#).unwrap()
});

/// A recognized dependency declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLine {
    /// Package spec including extras, e.g. `requests[socks]`
    package: String,
    /// Existing constraint, e.g. `>=1.0,<2.0; python_version>='3.9'`
    constraint: String,
    /// Terminator used when the line is rendered again
    line_ending: &'static str,
}

impl DependencyLine {
    /// Recognize a dependency line, or `None` for anything else
    pub fn parse(line: &str) -> Option<Self> {
        let caps = DEPENDENCY_LINE_RE.captures(line)?;
        let package = caps.name("package")?.as_str().trim();
        let constraint = caps.name("constraints")?.as_str().trim();

        if package.is_empty() {
            return None;
        }

        // A missing terminator (last line of the file) is rendered as `\n`
        let line_ending = if line.ends_with("\r\n") { "\r\n" } else { "\n" };

        Some(Self {
            package: package.to_string(),
            constraint: constraint.to_string(),
            line_ending,
        })
    }

    /// Package spec as written, extras included
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Package name with any `[extras]` suffix removed
    pub fn bare_name(&self) -> &str {
        match self.package.find('[') {
            Some(idx) => self.package[..idx].trim(),
            None => &self.package,
        }
    }

    /// The constraint currently in the manifest
    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    /// Environment marker carried by the constraint, if it has exactly one
    pub fn marker(&self) -> Option<&str> {
        let mut segments = self.constraint.split(';');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(marker), None) => Some(marker.trim()).filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Render the replacement line for a new constraint
    pub fn render(&self, constraint: &Constraint) -> String {
        format!(
            "  \"{} {}\",{}",
            self.package, constraint, self.line_ending
        )
    }
}

/// A floor/next-major constraint with an optional environment marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    lower: String,
    upper: u64,
    marker: Option<String>,
}

impl Constraint {
    /// Build the constraint for `version`, keeping the marker of `line`
    pub fn bumped(version: &Version, line: &DependencyLine) -> Self {
        Self {
            lower: version.as_str().to_string(),
            upper: version.next_major(),
            marker: line.marker().map(str::to_string),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">={},<{}", self.lower, self.upper)?;
        if let Some(marker) = &self.marker {
            write!(f, "; {}", marker)?;
        }
        Ok(())
    }
}
