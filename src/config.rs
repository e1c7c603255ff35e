use tracing::warn;

// =============================================================================
// Wheelhouse layout
// =============================================================================

/// Default wheelhouse root on CVMFS
pub const DEFAULT_WHEELHOUSE: &str = "/cvmfs/soft.computecanada.ca/custom/python/wheelhouse";

/// Extension of every wheel file in the wheelhouse
pub const WHEEL_EXTENSION: &str = ".whl";

/// Architectures the wheelhouse is partitioned by
pub const AVAILABLE_ARCHITECTURES: [&str; 4] = ["avx", "avx2", "sse3", "generic"];

/// Architecture whose wheels run everywhere
pub const GENERIC_ARCHITECTURE: &str = "generic";

/// Python versions with a known set of compatible runtime tags
pub const AVAILABLE_RUNTIMES: [&str; 4] = ["2.7", "3.5", "3.6", "3.7"];

/// Columns shown when none are requested
pub const DEFAULT_COLUMNS: [&str; 5] = ["name", "version", "build", "python", "arch"];

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the host CPU architecture
pub const ARCHITECTURE_ENV: &str = "RSNT_ARCH";

/// Environment variable holding the loaded python version (e.g. "3.6.3")
pub const PYTHON_VERSION_ENV: &str = "EBVERSIONPYTHON";

/// `generic` first, then the host architecture when one is known.
pub fn default_architectures_with_env(current_architecture: Option<String>) -> Vec<String> {
    let mut architectures = vec![GENERIC_ARCHITECTURE.to_string()];

    if let Some(current) = current_architecture
        .map(|arch| arch.trim().to_string())
        .filter(|arch| !arch.is_empty() && arch != GENERIC_ARCHITECTURE)
    {
        architectures.push(current);
    }

    architectures
}

/// The loaded python's major.minor, or every available runtime when no
/// python is loaded (personal systems, no modules) or the loaded one has no
/// known runtime tags.
pub fn default_runtimes_with_env(current_python: Option<String>) -> Vec<String> {
    match current_python.as_deref().and_then(major_minor) {
        Some(version) if AVAILABLE_RUNTIMES.contains(&version.as_str()) => vec![version],
        Some(version) => {
            warn!(
                "Loaded python {} has no known runtime tags, showing all of {:?}",
                version, AVAILABLE_RUNTIMES
            );
            all_runtimes()
        }
        None => all_runtimes(),
    }
}

fn all_runtimes() -> Vec<String> {
    AVAILABLE_RUNTIMES.iter().map(|v| v.to_string()).collect()
}

/// "3.6.3" -> "3.6", "3.10" -> "3.10", "3" -> None
fn major_minor(version: &str) -> Option<String> {
    let mut parts = version.trim().split('.');
    let major = parts.next().filter(|p| !p.is_empty())?;
    let minor = parts.next().filter(|p| !p.is_empty())?;
    Some(format!("{}.{}", major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("sse3"), vec!["generic", "sse3"])]
    #[case(Some("avx2"), vec!["generic", "avx2"])]
    #[case(Some("generic"), vec!["generic"])]
    #[case(Some(""), vec!["generic"])]
    #[case(None, vec!["generic"])]
    fn default_architectures_with_env_returns_expected(
        #[case] current: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(
            default_architectures_with_env(current.map(|s| s.to_string())),
            expected
        );
    }

    #[rstest]
    #[case(Some("3.6.3"), vec!["3.6"])]
    #[case(Some("2.7.14"), vec!["2.7"])]
    #[case(Some("3.7"), vec!["3.7"])]
    fn default_runtimes_with_env_uses_loaded_python(
        #[case] current: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(
            default_runtimes_with_env(current.map(|s| s.to_string())),
            expected
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("3"))]
    #[case(Some("3.8.2"))]
    #[case(Some("3.10.2"))]
    fn default_runtimes_with_env_falls_back_to_all_runtimes(#[case] current: Option<&str>) {
        assert_eq!(
            default_runtimes_with_env(current.map(|s| s.to_string())),
            AVAILABLE_RUNTIMES.to_vec()
        );
    }
}
