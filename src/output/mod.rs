//! Rendering of collected wheels
//!
//! - [`table`]: plain text and MediaWiki tables
//! - [`json`]: JSON rows for scripts

pub mod json;
pub mod table;

use crate::wheel::{Column, WheelGroups, to_rows};

/// How the listing is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain text table
    #[default]
    Simple,
    /// MediaWiki table markup
    MediaWiki,
    /// Wheel paths, one per line, unsorted
    Raw,
    /// Array of JSON objects keyed by column
    Json,
}

/// Render the wheels in the requested format.
///
/// Every format but [`OutputFormat::Raw`] sorts the wheels first. The
/// returned text ends with a newline unless it is empty.
pub fn render(
    groups: &WheelGroups,
    format: OutputFormat,
    columns: &[Column],
) -> Result<String, serde_json::Error> {
    let headers: Vec<&str> = columns.iter().map(Column::as_str).collect();

    let rendered = match format {
        OutputFormat::Raw => render_raw(groups),
        OutputFormat::Simple => table::simple(&headers, &to_rows(groups, columns)),
        OutputFormat::MediaWiki => table::mediawiki(&headers, &to_rows(groups, columns)),
        OutputFormat::Json => json::rows(&headers, &to_rows(groups, columns))?,
    };

    Ok(rendered)
}

fn render_raw(groups: &WheelGroups) -> String {
    groups
        .values()
        .flatten()
        .map(|wheel| format!("{}\n", wheel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::Artifact;

    fn groups() -> WheelGroups {
        let wheels = |files: &[&str]| -> Vec<Artifact> {
            files.iter().map(|f| Artifact::parse(f).unwrap()).collect()
        };
        WheelGroups::from([
            (
                "torch_cpu".to_string(),
                wheels(&["avx2/torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl"]),
            ),
            (
                "netCDF4".to_string(),
                wheels(&[
                    "avx2/netCDF4-1.3.1-cp36-cp36m-linux_x86_64.whl",
                    "avx2/netCDF4-1.2.0-cp36-cp36m-linux_x86_64.whl",
                ]),
            ),
        ])
    }

    #[test]
    fn render_raw_prints_paths_in_group_order() {
        let output = render(&groups(), OutputFormat::Raw, &[]).unwrap();

        assert_eq!(
            output,
            "avx2/torch_cpu-0.4.0-cp36-cp36m-linux_x86_64.whl\n\
             avx2/netCDF4-1.3.1-cp36-cp36m-linux_x86_64.whl\n\
             avx2/netCDF4-1.2.0-cp36-cp36m-linux_x86_64.whl\n"
        );
    }

    #[test]
    fn render_raw_of_nothing_is_empty() {
        assert_eq!(render(&WheelGroups::new(), OutputFormat::Raw, &[]).unwrap(), "");
    }

    #[test]
    fn render_simple_sorts_rows() {
        let output = render(
            &groups(),
            OutputFormat::Simple,
            &[Column::Name, Column::Version],
        )
        .unwrap();

        assert_eq!(
            output,
            "name       version\n\
             ---------  -------\n\
             netCDF4    1.3.1\n\
             netCDF4    1.2.0\n\
             torch_cpu  0.4.0\n"
        );
    }

    #[test]
    fn render_simple_of_nothing_keeps_headers() {
        let output = render(&WheelGroups::new(), OutputFormat::Simple, &[Column::Name]).unwrap();

        assert_eq!(output, "name\n----\n");
    }
}
