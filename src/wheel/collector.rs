//! Wheelhouse traversal
//!
//! The wheelhouse keeps one directory per architecture, each holding the
//! wheel files directly:
//!
//! ```text
//! wheelhouse/
//! ├── avx2/netCDF4-1.3.1-cp36-cp36m-linux_x86_64.whl
//! ├── avx/...
//! └── generic/six-1.11.0-py2.py3-none-any.whl
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use glob::{MatchOptions, Pattern};
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::config::WHEEL_EXTENSION;
use crate::wheel::WheelGroups;
use crate::wheel::artifact::Artifact;
use crate::wheel::compat::compatible_runtime;
use crate::wheel::error::WheelError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Lists the wheel files of one architecture
#[cfg_attr(test, automock)]
pub trait WheelSource {
    /// File names (without directory) found for the architecture.
    /// An architecture the source doesn't have yields no files.
    fn list_files(&self, architecture: &str) -> Result<Vec<String>, WheelError>;
}

/// Wheelhouse on the local filesystem
#[derive(Debug, Clone)]
pub struct DirectoryWheelSource {
    root: PathBuf,
}

impl DirectoryWheelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WheelSource for DirectoryWheelSource {
    fn list_files(&self, architecture: &str) -> Result<Vec<String>, WheelError> {
        let dir = self.root.join(architecture);
        let traversal = |source| WheelError::Traversal {
            path: dir.clone(),
            source,
        };

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No directory for architecture {} at {:?}", architecture, dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(traversal(e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(traversal)?.path();
            if !path.is_file() {
                continue;
            }
            match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => files.push(name.to_string()),
                None => debug!("Skipping non UTF-8 file name {:?}", path),
            }
        }

        // read_dir order is unspecified
        files.sort();
        Ok(files)
    }
}

/// What to look for in the wheelhouse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WheelFilter {
    /// Architectures to visit, in order
    pub architectures: Vec<String>,
    /// Glob on the package name (case insensitive)
    pub name: String,
    /// Glob on the version (case insensitive)
    pub version: String,
    /// Python versions the wheels must run on
    pub runtimes: Vec<String>,
}

impl WheelFilter {
    /// File name glob: `{name}*{version}*.whl`, read the way fnmatch reads
    /// it. Runs of `*` collapse since `**` only has a meaning for whole path
    /// components, and a `[` that is never closed matches itself.
    pub fn glob_pattern(&self) -> String {
        let pattern: Vec<char> = format!("{}*{}*{}", self.name, self.version, WHEEL_EXTENSION)
            .chars()
            .collect();

        let mut glob = String::with_capacity(pattern.len());
        let mut i = 0;
        while i < pattern.len() {
            match pattern[i] {
                '*' if glob.ends_with('*') => {}
                '[' => match bracket_len(&pattern[i..]) {
                    Some(len) => {
                        glob.extend(&pattern[i..i + len]);
                        i += len;
                        continue;
                    }
                    None => glob.push_str("[[]"),
                },
                c => glob.push(c),
            }
            i += 1;
        }
        glob
    }
}

/// Length of the bracket expression `chars` starts with, closing `]`
/// included. A `]` right after `[` or `[!` is a member of the set.
fn bracket_len(chars: &[char]) -> Option<usize> {
    let first_member = if chars.get(1) == Some(&'!') { 2 } else { 1 };
    chars
        .get(first_member + 1..)?
        .iter()
        .position(|&c| c == ']')
        .map(|pos| first_member + pos + 2)
}

/// Collect the wheels matching `filter`, grouped by package name in
/// traversal order.
///
/// A glob-matched file whose name doesn't follow the wheel naming
/// convention aborts the collection.
pub fn collect<S: WheelSource + ?Sized>(
    source: &S,
    filter: &WheelFilter,
) -> Result<WheelGroups, WheelError> {
    let pattern = filter.glob_pattern();
    let matcher = Pattern::new(&pattern).map_err(|source| WheelError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut groups = WheelGroups::new();

    for architecture in &filter.architectures {
        for file in source.list_files(architecture)? {
            if !matcher.matches_with(&file, MATCH_OPTIONS) {
                continue;
            }

            let artifact = Artifact::parse(&format!("{}/{}", architecture, file))?;

            let Some(runtime) = compatible_runtime(&artifact, filter.runtimes.as_slice()) else {
                debug!("{} runs on none of {:?}", artifact, filter.runtimes);
                continue;
            };
            debug!("{} matched for python {}", artifact, runtime);

            groups
                .entry(artifact.name().to_string())
                .or_default()
                .push(artifact);
        }
    }

    Ok(groups)
}

/// [`collect`] over a wheelhouse directory
pub fn collect_from_dir(
    root: impl Into<PathBuf>,
    filter: &WheelFilter,
) -> Result<WheelGroups, WheelError> {
    collect(&DirectoryWheelSource::new(root), filter)
}
