//! Row ordering and column selection

use std::cmp::Reverse;

use crate::wheel::WheelGroups;
use crate::wheel::artifact::Artifact;

/// A displayable wheel tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Column {
    Name,
    Version,
    Build,
    #[value(alias = "python")]
    Runtime,
    Abi,
    Platform,
    #[value(alias = "arch")]
    Architecture,
}

impl Column {
    /// Returns the header shown for the column
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Version => "version",
            Column::Build => "build",
            Column::Runtime => "python",
            Column::Abi => "abi",
            Column::Platform => "platform",
            Column::Architecture => "arch",
        }
    }

    /// Value of the column for a wheel
    pub fn value<'a>(&self, artifact: &'a Artifact) -> Option<&'a str> {
        match self {
            Column::Name => Some(artifact.name()),
            Column::Version => Some(artifact.version()),
            Column::Build => artifact.build(),
            Column::Runtime => Some(artifact.runtime_tag()),
            Column::Abi => Some(artifact.abi_tag()),
            Column::Platform => Some(artifact.platform_tag()),
            Column::Architecture => Some(artifact.architecture()),
        }
    }
}

/// One table line, a value per requested column
pub type Row<'a> = Vec<Option<&'a str>>;

/// Flatten wheel groups into rows.
///
/// Groups are ordered by name, case insensitively. Within a group the
/// wheels are ordered by version, then architecture, then python tag, all
/// descending.
pub fn to_rows<'a>(groups: &'a WheelGroups, columns: &[Column]) -> Vec<Row<'a>> {
    let mut names: Vec<&String> = groups.keys().collect();
    names.sort_by_cached_key(|name| name.to_lowercase());

    let mut rows = Vec::new();
    for name in names {
        let mut wheels: Vec<&Artifact> = groups[name].iter().collect();
        sort_wheels(&mut wheels);

        rows.extend(
            wheels
                .into_iter()
                .map(|wheel| columns.iter().map(|column| column.value(wheel)).collect()),
        );
    }

    rows
}

/// Order wheels of one package by version, then architecture, then python
/// tag, all descending.
pub fn sort_wheels(wheels: &mut [&Artifact]) {
    // Stable sorts: the last one is the primary key
    wheels.sort_by(|a, b| b.runtime_tag().cmp(a.runtime_tag()));
    wheels.sort_by(|a, b| b.architecture().cmp(a.architecture()));
    wheels.sort_by_cached_key(|wheel| Reverse(wheel.loose_version()));
}
