//! Single-pass parser for the XPM matrix format.
//!
//! Lines are classified by structural markers in one forward pass: the
//! `static char` declaration announces the dimension line, `/* key: */`
//! comments carry metadata and axis coordinates, 7-token `c` lines make up
//! the color table, and quoted lines of exactly `width * symbol_width`
//! characters are pixel rows. Everything else is ignored. Structural
//! invariants are checked after the pass; any violation aborts the parse.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};
use xpm_common::Rgb;

use crate::dataset::{ColorEntry, DatasetKind, XpmDataset};
use crate::error::{XpmError, XpmResult};

/// A successful parse: the dataset plus any non-fatal warnings.
#[derive(Debug, Clone)]
pub struct ParsedXpm {
    pub dataset: XpmDataset,
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal irregularities encountered while parsing.
///
/// Warnings are surfaced to the caller and logged, but the documented
/// fallback (padding, midpoint collapse on alignment) is already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A color symbol was shorter than the declared width and has been
    /// right-padded with spaces.
    PaddedSymbol { symbol: String },
    /// The x axis carries `width + 1` boundary values; alignment collapses
    /// them to midpoints.
    XAxisBoundaries,
    /// The y axis carries `height + 1` boundary values.
    YAxisBoundaries,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PaddedSymbol { symbol } => {
                write!(f, "color symbol {symbol:?} padded with trailing spaces")
            }
            Self::XAxisBoundaries => {
                write!(f, "x-axis holds boundary values, midpoints used for alignment")
            }
            Self::YAxisBoundaries => {
                write!(f, "y-axis holds boundary values, midpoints used for alignment")
            }
        }
    }
}

/// Parse an XPM file from disk.
pub fn parse_file(path: impl AsRef<Path>) -> XpmResult<ParsedXpm> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading xpm file");
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

/// Where the parser stands relative to the dimension line.
enum DimensionLine {
    Searching,
    OnNextLine,
    Parsed,
}

/// Parse XPM text into a validated dataset.
pub fn parse_str(input: &str) -> XpmResult<ParsedXpm> {
    let mut title = String::new();
    let mut legend = String::new();
    let mut type_str = String::new();
    let mut x_label = String::new();
    let mut y_label = String::new();

    let mut dims: Option<(usize, usize, usize, usize)> = None;
    let mut dim_state = DimensionLine::Searching;

    let mut color_table: Vec<ColorEntry> = Vec::new();
    let mut x_axis: Vec<f64> = Vec::new();
    let mut y_axis: Vec<f64> = Vec::new();
    let mut rows: Vec<String> = Vec::new();
    let mut warnings: Vec<ParseWarning> = Vec::new();

    for raw_line in input.lines() {
        let line = raw_line.trim();

        match dim_state {
            DimensionLine::OnNextLine => {
                dims = Some(parse_dimension_line(line)?);
                dim_state = DimensionLine::Parsed;
                continue;
            }
            DimensionLine::Searching if line.starts_with("static char") => {
                dim_state = DimensionLine::OnNextLine;
                continue;
            }
            _ => {}
        }

        if line.starts_with("/* x-axis") {
            append_axis_values(line, 'x', &mut x_axis)?;
            continue;
        } else if line.starts_with("/* y-axis") {
            append_axis_values(line, 'y', &mut y_axis)?;
            continue;
        } else if line.starts_with("/* title") {
            title = quoted_text(line)?.to_string();
            continue;
        } else if line.starts_with("/* legend") {
            legend = quoted_text(line)?.to_string();
            continue;
        } else if line.starts_with("/* x-label") {
            x_label = quoted_text(line)?.to_string();
            continue;
        } else if line.starts_with("/* y-label") {
            y_label = quoted_text(line)?.to_string();
            continue;
        } else if line.starts_with("/* type") {
            type_str = quoted_text(line)?.to_string();
            continue;
        }

        // Color-table entries and pixel rows only make sense once the
        // dimension line is known; earlier candidates fall through to the
        // post-pass count checks.
        let Some((width, _, _, symbol_width)) = dims else {
            continue;
        };

        let items: Vec<&str> = line.split_whitespace().collect();
        if items.len() == 7 && items[1] == "c" {
            color_table.push(parse_color_entry(&items, symbol_width, &mut warnings)?);
            continue;
        }

        if line.starts_with('"') {
            let content = line.trim_matches(',').trim_matches('"');
            // symbols are single-byte characters, so byte length is the
            // pixel count and byte offsets are symbol boundaries
            if content.is_ascii() && content.len() == width * symbol_width {
                rows.push(content.to_string());
            }
        }
    }

    let (width, height, color_count, symbol_width) = dims.ok_or(XpmError::MissingDimensions)?;

    if color_table.len() != color_count {
        return Err(XpmError::ColorCountMismatch {
            found: color_table.len(),
            declared: color_count,
        });
    }
    if rows.len() != height {
        return Err(XpmError::RowCountMismatch {
            found: rows.len(),
            declared: height,
        });
    }
    check_axis_length(&x_axis, width, 'x', &mut warnings)?;
    check_axis_length(&y_axis, height, 'y', &mut warnings)?;

    let known: HashSet<&str> = color_table.iter().map(|e| e.symbol.as_str()).collect();
    for (row_idx, row) in rows.iter().enumerate() {
        for col in 0..width {
            let symbol = &row[col * symbol_width..(col + 1) * symbol_width];
            if !known.contains(symbol) {
                return Err(XpmError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    row: row_idx,
                });
            }
        }
    }

    let kind = DatasetKind::from_type_str(&type_str);
    info!(
        width = width,
        height = height,
        colors = color_count,
        kind = %kind,
        "parsed xpm dataset"
    );

    Ok(ParsedXpm {
        dataset: XpmDataset {
            title,
            legend,
            kind,
            x_label,
            y_label,
            width,
            height,
            color_count,
            symbol_width,
            color_table,
            x_axis,
            y_axis,
            rows,
        },
        warnings,
    })
}

/// Parse the `"width height color_count symbol_width"` line.
fn parse_dimension_line(line: &str) -> XpmResult<(usize, usize, usize, usize)> {
    let invalid = |message: &str| XpmError::InvalidDimensions {
        line: line.to_string(),
        message: message.to_string(),
    };

    let content = line.trim_matches(',').trim_matches('"');
    let values = content
        .split_whitespace()
        .map(|tok| tok.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid("dimension values must be integers"))?;

    if values.len() != 4 {
        return Err(invalid("expected four integers"));
    }
    let (width, height, color_count, symbol_width) = (values[0], values[1], values[2], values[3]);
    if width == 0 || height == 0 || color_count == 0 || symbol_width == 0 {
        return Err(invalid("dimensions must be positive"));
    }
    Ok((width, height, color_count, symbol_width))
}

/// Append the numeric tokens of an axis comment line.
///
/// Axis declarations may span several comment lines; each occurrence appends
/// to the running array. Tokens between the `x-axis:` marker and the closing
/// `*/` are the values.
fn append_axis_values(line: &str, axis: char, out: &mut Vec<f64>) -> XpmResult<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Ok(());
    }
    for tok in &tokens[2..tokens.len() - 1] {
        let value: f64 = tok.parse().map_err(|_| XpmError::InvalidAxisValue {
            axis,
            token: tok.to_string(),
        })?;
        out.push(value);
    }
    Ok(())
}

/// Extract the text between the first pair of double quotes.
fn quoted_text(line: &str) -> XpmResult<&str> {
    let open = line.find('"').ok_or_else(|| XpmError::InvalidMetadata(line.to_string()))?;
    let rest = &line[open + 1..];
    let close = rest.find('"').ok_or_else(|| XpmError::InvalidMetadata(line.to_string()))?;
    Ok(&rest[..close])
}

/// Parse one 7-token color-table line.
fn parse_color_entry(
    items: &[&str],
    symbol_width: usize,
    warnings: &mut Vec<ParseWarning>,
) -> XpmResult<ColorEntry> {
    let mut symbol = items[0].trim_matches('"').to_string();
    if symbol.len() > symbol_width {
        return Err(XpmError::OversizedSymbol {
            symbol,
            width: symbol_width,
        });
    }
    if symbol.len() < symbol_width {
        warn!(symbol = %symbol, width = symbol_width, "short color symbol, padding with spaces");
        warnings.push(ParseWarning::PaddedSymbol {
            symbol: symbol.clone(),
        });
        while symbol.len() < symbol_width {
            symbol.push(' ');
        }
    }

    let hex = items[2].to_string();
    let rgb = Rgb::from_hex(&hex).map_err(|source| XpmError::InvalidColor {
        symbol: symbol.clone(),
        source,
    })?;
    let note = items[5].trim_matches('"').to_string();

    Ok(ColorEntry {
        symbol,
        hex,
        rgb,
        note,
    })
}

/// Check a raw axis length against the grid dimension.
fn check_axis_length(
    axis_values: &[f64],
    expected: usize,
    axis: char,
    warnings: &mut Vec<ParseWarning>,
) -> XpmResult<()> {
    if axis_values.len() == expected {
        return Ok(());
    }
    if axis_values.len() == expected + 1 {
        warn!(axis = %axis, "axis holds boundary values, midpoints will be used for alignment");
        warnings.push(match axis {
            'x' => ParseWarning::XAxisBoundaries,
            _ => ParseWarning::YAxisBoundaries,
        });
        return Ok(());
    }
    Err(XpmError::AxisLength {
        axis,
        found: axis_values.len(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"/* XPM */
/* title:   "Gibbs Energy Landscape" */
/* legend:  "G (kJ/mol)" */
/* x-label: "PC1" */
/* y-label: "PC2" */
/* type:    "Continuous" */
static char *gv_xpm[] = {
"2 2   2 1",
"A  c #FFFFFF " /* "0.0" */,
"B  c #FF0000 " /* "1.0" */,
/* x-axis:  0 1 */
/* y-axis:  0 1 */
"AB",
"BA"
};
"#;

    #[test]
    fn test_parse_sample() {
        let parsed = parse_str(SAMPLE).unwrap();
        let ds = &parsed.dataset;

        assert_eq!(ds.title, "Gibbs Energy Landscape");
        assert_eq!(ds.legend, "G (kJ/mol)");
        assert_eq!(ds.x_label, "PC1");
        assert_eq!(ds.y_label, "PC2");
        assert_eq!(ds.kind, DatasetKind::Continuous);
        assert_eq!((ds.width, ds.height), (2, 2));
        assert_eq!(ds.symbol_width, 1);

        assert_eq!(ds.color_table.len(), 2);
        assert_eq!(ds.color_table[0].symbol, "A");
        assert_eq!(ds.color_table[0].hex, "#FFFFFF");
        assert_eq!(ds.color_table[0].note, "0.0");
        assert_eq!(ds.color_table[1].rgb.as_array(), [255, 0, 0]);

        assert_eq!(ds.x_axis, vec![0.0, 1.0]);
        assert_eq!(ds.y_axis, vec![0.0, 1.0]);
        assert_eq!(ds.rows, vec!["AB", "BA"]);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_aligned_y_is_reversed() {
        let parsed = parse_str(SAMPLE).unwrap();
        let axes = parsed.dataset.aligned_axes();
        assert_eq!(axes.x, vec![0.0, 1.0]);
        assert_eq!(axes.y, vec![1.0, 0.0]);
    }

    #[test]
    fn test_color_count_mismatch_is_fatal() {
        // header declares 3 colors but only 2 entries follow
        let input = SAMPLE.replace("\"2 2   2 1\"", "\"2 2   3 1\"");
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(
            err,
            XpmError::ColorCountMismatch { found: 2, declared: 3 }
        ));
    }

    #[test]
    fn test_row_count_mismatch_is_fatal() {
        let input = SAMPLE.replace("\"BA\"\n", "");
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(
            err,
            XpmError::RowCountMismatch { found: 1, declared: 2 }
        ));
    }

    #[test]
    fn test_wrong_row_length_is_fatal() {
        // a short row is not recognized as pixel data, so the row count trips
        let input = SAMPLE.replace("\"BA\"", "\"B\"");
        assert!(matches!(
            parse_str(&input).unwrap_err(),
            XpmError::RowCountMismatch { .. }
        ));
    }

    #[test]
    fn test_unknown_symbol_is_fatal() {
        let input = SAMPLE.replace("\"BA\"", "\"BZ\"");
        let err = parse_str(&input).unwrap_err();
        match err {
            XpmError::UnknownSymbol { symbol, row } => {
                assert_eq!(symbol, "Z");
                assert_eq!(row, 1);
            }
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_axis_length_mismatch_is_fatal() {
        let input = SAMPLE.replace("/* x-axis:  0 1 */", "/* x-axis:  0 1 2 3 */");
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(
            err,
            XpmError::AxisLength { axis: 'x', found: 4, expected: 2 }
        ));
    }

    #[test]
    fn test_boundary_axis_warns_but_parses() {
        let input = SAMPLE.replace("/* x-axis:  0 1 */", "/* x-axis:  0 1 2 */");
        let parsed = parse_str(&input).unwrap();
        assert_eq!(parsed.dataset.x_axis, vec![0.0, 1.0, 2.0]);
        assert_eq!(parsed.warnings, vec![ParseWarning::XAxisBoundaries]);
        assert_eq!(parsed.dataset.aligned_axes().x, vec![0.5, 1.5]);
    }

    #[test]
    fn test_multi_line_axis_accumulates() {
        let input = SAMPLE.replace(
            "/* x-axis:  0 1 */",
            "/* x-axis:  0 */\n/* x-axis:  1 */",
        );
        let parsed = parse_str(&input).unwrap();
        assert_eq!(parsed.dataset.x_axis, vec![0.0, 1.0]);
    }

    #[test]
    fn test_short_symbol_padded_with_warning() {
        let input = r#"static char *gv_xpm[] = {
"2 1 2 2",
"AA  c #FFFFFF " /* "0.0" */,
"B  c #FF0000 " /* "1.0" */,
/* x-axis:  0 1 */
/* y-axis:  0.5 */
"AAB ",
"#;
        let parsed = parse_str(input).unwrap();
        assert_eq!(parsed.dataset.color_table[1].symbol, "B ");
        assert_eq!(
            parsed.warnings,
            vec![ParseWarning::PaddedSymbol { symbol: "B".to_string() }]
        );
        assert_eq!(parsed.dataset.symbol_at(0, 1), Some("B "));
    }

    #[test]
    fn test_oversized_symbol_is_fatal() {
        let input = SAMPLE.replace(
            r#""B  c #FF0000 " /* "1.0" */,"#,
            r#""BB  c #FF0000 " /* "1.0" */,"#,
        );
        assert!(matches!(
            parse_str(&input).unwrap_err(),
            XpmError::OversizedSymbol { .. }
        ));
    }

    #[test]
    fn test_bad_hex_color_is_fatal() {
        let input = SAMPLE.replace("#FF0000", "#FF00GG");
        assert!(matches!(
            parse_str(&input).unwrap_err(),
            XpmError::InvalidColor { .. }
        ));
    }

    #[test]
    fn test_missing_dimension_line() {
        assert!(matches!(
            parse_str("/* just a comment */\n").unwrap_err(),
            XpmError::MissingDimensions
        ));
    }

    #[test]
    fn test_bad_dimension_line() {
        let input = SAMPLE.replace("\"2 2   2 1\"", "\"2 2 1\"");
        assert!(matches!(
            parse_str(&input).unwrap_err(),
            XpmError::InvalidDimensions { .. }
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let input = SAMPLE.replace("\"2 2   2 1\"", "\"0 2 2 1\"");
        assert!(matches!(
            parse_str(&input).unwrap_err(),
            XpmError::InvalidDimensions { .. }
        ));
    }

    #[test]
    fn test_non_ascii_row_not_pixel_data() {
        // "é" is two bytes, so the row passes the length check but is not a
        // valid symbol sequence; it must be skipped, not sliced mid-character
        let input = SAMPLE.replace("\"BA\"", "\"é\"");
        assert!(matches!(
            parse_str(&input).unwrap_err(),
            XpmError::RowCountMismatch { found: 1, declared: 2 }
        ));
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        let input = format!("/* some banner */\n{SAMPLE}\n/* trailing */\n");
        assert!(parse_str(&input).is_ok());
    }
}
