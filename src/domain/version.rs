//! Release versions reported by the package index
//!
//! Accepts PEP 440 public versions such as `2.31.0`, `1!2.0`, `3.0.0rc1`,
//! `1.4.post2` or `0.9.dev3+local.1`. Only the leading release segment
//! matters for the next-major ceiling; the rest is kept as published.

use crate::error::VersionError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Mirrors the canonical PEP 440 pattern (epoch, release, pre, post, dev, local)
static PEP440_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^v?
        (?:(?P<epoch>\d+)!)?
        (?P<release>\d+(?:\.\d+)*)
        (?:[-_.]?(?:a|b|c|rc|alpha|beta|pre|preview)[-_.]?\d*)?
        (?:-\d+|[-_.]?(?:post|rev|r)[-_.]?\d*)?
        (?:[-_.]?dev[-_.]?\d*)?
        (?:\+[a-z0-9]+(?:[-_.][a-z0-9]+)*)?
        $",
    )
    .unwrap()
});

/// A parsed release version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Version string as published, without a leading `v`
    raw: String,
    /// First release segment
    major: u64,
}

impl Version {
    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let malformed = || VersionError::Malformed {
            version: trimmed.to_string(),
        };

        let caps = PEP440_RE.captures(trimmed).ok_or_else(malformed)?;
        let release = caps.name("release").ok_or_else(malformed)?.as_str();
        let major = release
            .split('.')
            .next()
            .and_then(|segment| segment.parse::<u64>().ok())
            .filter(|major| *major < u64::MAX)
            .ok_or_else(malformed)?;

        let raw = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed)
            .to_string();

        Ok(Self { raw, major })
    }

    /// The major (first release) component
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Exclusive upper bound for this release line
    pub fn next_major(&self) -> u64 {
        self.major + 1
    }

    /// The version string as published
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
