//! Python version to runtime tag compatibility

use crate::wheel::artifact::Artifact;

/// Runtime tags a python version can install: the universal tag, the
/// major-only tag and the CPython tag.
const COMPATIBLE_RUNTIME_TAGS: [(&str, [&str; 3]); 4] = [
    ("2.7", ["py2.py3", "py2", "cp27"]),
    ("3.5", ["py2.py3", "py3", "cp35"]),
    ("3.6", ["py2.py3", "py3", "cp36"]),
    ("3.7", ["py2.py3", "py3", "cp37"]),
];

/// Returns the runtime tags compatible with a python version, if it is known
pub fn compatible_tags(runtime: &str) -> Option<&'static [&'static str]> {
    COMPATIBLE_RUNTIME_TAGS
        .iter()
        .find(|(version, _)| *version == runtime)
        .map(|(_, tags)| tags.as_slice())
}

/// Returns the first requested python version the artifact can run on
pub fn compatible_runtime<'a, S: AsRef<str>>(
    artifact: &Artifact,
    requested_runtimes: &'a [S],
) -> Option<&'a str> {
    requested_runtimes
        .iter()
        .map(AsRef::as_ref)
        .find(|runtime| {
            compatible_tags(runtime).is_some_and(|tags| tags.contains(&artifact.runtime_tag()))
        })
}

/// Check whether the artifact runs on any of the requested python versions
pub fn is_compatible<S: AsRef<str>>(artifact: &Artifact, requested_runtimes: &[S]) -> bool {
    compatible_runtime(artifact, requested_runtimes).is_some()
}
