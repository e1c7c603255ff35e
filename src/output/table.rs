//! Text tables
//!
//! Missing values (no build tag) render as empty cells.

use crate::wheel::Row;

const COLUMN_SEPARATOR: &str = "  ";

/// Plain table: headers, a dash line, then rows, left aligned
///
/// ```text
/// name     version
/// -------  -------
/// netCDF4  1.3.1
/// ```
pub fn simple(headers: &[&str], rows: &[Row<'_>]) -> String {
    let widths = column_widths(headers, rows);
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    push_line(&mut out, dashes.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(|v| v.unwrap_or("")), &widths);
    }
    out
}

/// MediaWiki `wikitable` markup
pub fn mediawiki(headers: &[&str], rows: &[Row<'_>]) -> String {
    let widths = column_widths(headers, rows);

    let mut out = String::from("{| class=\"wikitable\" style=\"text-align: left;\"\n");
    out.push_str("|+ <!-- caption -->\n");
    out.push_str("|-\n");
    out.push_str(&wiki_line("!", "!!", headers.iter().copied(), &widths));
    for row in rows {
        out.push_str("|-\n");
        out.push_str(&wiki_line(
            "|",
            "||",
            row.iter().map(|v| v.unwrap_or("")),
            &widths,
        ));
    }
    out.push_str("|}\n");
    out
}

fn column_widths(headers: &[&str], rows: &[Row<'_>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i).copied().flatten())
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect()
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    out.push_str(line.trim_end());
    out.push('\n');
}

fn wiki_line<'a>(
    first: &str,
    separator: &str,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> String {
    let cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    let separator = format!(" {} ", separator);
    let line = format!("{} {}", first, cells.join(separator.as_str()));
    format!("{}\n", line.trim_end())
}
