//! Wheel filename parsing
//!
//! A wheel in the wheelhouse is addressed by its path relative to the root:
//! `{arch}/{name}-{version}(-{build})?-{python}-{abi}-{platform}.whl`
//!
//! Examples:
//! - `avx2/netCDF4-1.3.1-cp36-cp36m-linux_x86_64.whl`
//! - `avx/tensorflow_cpu-1.6.0+computecanada-cp36-cp36m-linux_x86_64.whl`
//! - `generic/backports.functools_lru_cache-1.4-py2.py3-none-any.whl`

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::wheel::error::WheelError;
use crate::wheel::version::LooseVersion;

/// Anchored at the start; the extension is left unmatched.
/// The build repetition is lazy and only its last capture is kept.
static WHEEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<arch>\w+)/(?P<name>[\w.]+)-(?P<version>(?:[\w.]+)?)(?:[+-](?P<build>\w+))*?-(?P<python>[\w.]+)-(?P<abi>\w+)-(?P<platform>\w+)",
    )
    .unwrap()
});

/// Tags of a wheel, given by name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WheelTags {
    pub architecture: String,
    pub name: String,
    pub version: String,
    pub build: Option<String>,
    pub runtime_tag: String,
    pub abi_tag: String,
    pub platform_tag: String,
}

/// A single wheel file of the wheelhouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    filename: String,
    tags: WheelTags,
}

impl Artifact {
    /// Build an artifact from already known tags, without parsing `filename`
    pub fn new(filename: impl Into<String>, tags: WheelTags) -> Self {
        Self {
            filename: filename.into(),
            tags,
        }
    }

    /// Parse an `{arch}/{wheel file}` path into an artifact
    pub fn parse(filename: &str) -> Result<Self, WheelError> {
        let caps = WHEEL_RE
            .captures(filename)
            .ok_or_else(|| WheelError::MalformedArtifactName {
                filename: filename.to_string(),
            })?;

        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Ok(Self::new(
            filename,
            WheelTags {
                architecture: group("arch"),
                name: group("name"),
                version: group("version"),
                build: caps.name("build").map(|m| m.as_str().to_string()),
                runtime_tag: group("python"),
                abi_tag: group("abi"),
                platform_tag: group("platform"),
            },
        ))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn architecture(&self) -> &str {
        &self.tags.architecture
    }

    pub fn name(&self) -> &str {
        &self.tags.name
    }

    pub fn version(&self) -> &str {
        &self.tags.version
    }

    pub fn build(&self) -> Option<&str> {
        self.tags.build.as_deref()
    }

    pub fn runtime_tag(&self) -> &str {
        &self.tags.runtime_tag
    }

    pub fn abi_tag(&self) -> &str {
        &self.tags.abi_tag
    }

    pub fn platform_tag(&self) -> &str {
        &self.tags.platform_tag
    }

    pub fn tags(&self) -> &WheelTags {
        &self.tags
    }

    pub fn loose_version(&self) -> LooseVersion {
        LooseVersion::parse(&self.tags.version)
    }
}

impl FromStr for Artifact {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)
    }
}
