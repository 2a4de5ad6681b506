//! Edge-list file parsing.
//!
//! One edge per line as `source target [weight]`, whitespace separated.
//! Blank lines and lines starting with `#` are skipped; a missing weight
//! defaults to [`DEFAULT_WEIGHT`]. Values are kept as signed integers so the
//! session reports range problems with its own error codes.

use std::io::BufRead;
use std::path::Path;

use keiro_core::DEFAULT_WEIGHT;

use super::commands::CliError;

/// One parsed edge line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub source: i64,
    /// Second endpoint.
    pub target: i64,
    /// Edge weight.
    pub weight: i64,
    /// One-based line number the edge came from.
    pub line: usize,
}

/// Parses every edge in `reader`. `path` is only used for error messages.
///
/// # Errors
/// Returns [`CliError::Io`] when reading fails and [`CliError::Parse`] for a
/// malformed line.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use keiro_cli::cli::parse_edges;
///
/// let input = "# triangle\n0 1 4\n1 2\n\n2 0 3\n";
/// let edges = parse_edges(input.as_bytes(), Path::new("triangle.txt"))?;
/// assert_eq!(edges.len(), 3);
/// assert_eq!(edges[1].weight, 1);
/// # Ok::<(), keiro_cli::cli::CliError>(())
/// ```
pub fn parse_edges(reader: impl BufRead, path: &Path) -> Result<Vec<EdgeSpec>, CliError> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let text = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(edge) = parse_line(&text, line_number).map_err(|message| CliError::Parse {
            path: path.to_path_buf(),
            line: line_number,
            message,
        })? {
            edges.push(edge);
        }
    }
    Ok(edges)
}

fn parse_line(text: &str, line: usize) -> Result<Option<EdgeSpec>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let mut fields = trimmed.split_whitespace();
    let source = parse_field(fields.next(), "source")?;
    let target = parse_field(fields.next(), "target")?;
    let weight = match fields.next() {
        Some(raw) => parse_field(Some(raw), "weight")?,
        None => i64::from(DEFAULT_WEIGHT),
    };
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected trailing field `{extra}`"));
    }
    Ok(Some(EdgeSpec {
        source,
        target,
        weight,
        line,
    }))
}

fn parse_field(field: Option<&str>, name: &str) -> Result<i64, String> {
    let raw = field.ok_or_else(|| format!("missing {name}"))?;
    raw.parse()
        .map_err(|err| format!("invalid {name} `{raw}`: {err}"))
}
