//! Integration tests: generated GROMACS-style files through the parser.

use test_utils::{fixtures, XpmBuilder};
use xpm_parser::{parse_file, parse_str, DatasetKind, ParseWarning, XpmError};

#[test]
fn test_round_trip_through_builder() {
    let text = XpmBuilder::new()
        .title("Gibbs Energy Landscape")
        .legend("G (kJ/mol)")
        .labels("PC1", "PC2")
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#0000FF", "2.5")
        .color("C", "#FF0000", "5.0")
        .x_axis(&[-1.0, 0.0, 1.0])
        .y_axis(&[2.0, 4.0, 6.0])
        .row("ABC")
        .row("BCA")
        .row("CAB")
        .build();

    let parsed = parse_str(&text).unwrap();
    let ds = &parsed.dataset;

    assert_eq!((ds.width, ds.height, ds.color_count, ds.symbol_width), (3, 3, 3, 1));
    assert_eq!(ds.kind, DatasetKind::Continuous);
    assert_eq!(ds.x_axis, vec![-1.0, 0.0, 1.0]);
    assert_eq!(ds.rows[2], "CAB");
    assert!(parsed.warnings.is_empty());
}

#[test]
fn test_two_character_symbols() {
    let text = XpmBuilder::new()
        .symbol_width(2)
        .color("AA", "#FFFFFF", "0.0")
        .color("BB", "#FF0000", "1.5")
        .x_axis(&[0.0, 1.0])
        .y_axis(&[0.0])
        .row("AABB")
        .build();

    let ds = parse_str(&text).unwrap().dataset;
    assert_eq!(ds.width, 2);
    assert_eq!(ds.symbol_at(0, 0), Some("AA"));
    assert_eq!(ds.symbol_at(0, 1), Some("BB"));
}

#[test]
fn test_boundary_axes_collapse_to_midpoints() {
    let parsed = parse_str(&fixtures::continuous_boundary_axes_2x2()).unwrap();

    assert_eq!(parsed.warnings, vec![ParseWarning::XAxisBoundaries]);
    // raw values are kept; alignment collapses on demand
    assert_eq!(parsed.dataset.x_axis, vec![0.0, 1.0, 2.0]);
    let axes = parsed.dataset.aligned_axes();
    assert_eq!(axes.x, vec![0.5, 1.5]);
    assert_eq!(axes.y, vec![1.0, 0.0]);
}

#[test]
fn test_declared_color_count_mismatch() {
    let text = XpmBuilder::new()
        .declared_colors(3)
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#FF0000", "1.0")
        .x_axis(&[0.0, 1.0])
        .y_axis(&[0.0, 1.0])
        .row("AB")
        .row("BA")
        .build();

    assert!(matches!(
        parse_str(&text).unwrap_err(),
        XpmError::ColorCountMismatch { found: 2, declared: 3 }
    ));
}

#[test]
fn test_declared_width_mismatch() {
    // rows of the wrong length are not recognized as pixel data, so the
    // declared height can never be met
    let text = XpmBuilder::new()
        .declared_width(3)
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#FF0000", "1.0")
        .x_axis(&[0.0, 1.0, 2.0])
        .y_axis(&[0.0, 1.0])
        .row("AB")
        .row("BA")
        .build();

    assert!(matches!(
        parse_str(&text).unwrap_err(),
        XpmError::RowCountMismatch { found: 0, declared: 2 }
    ));
}

#[test]
fn test_declared_height_mismatch() {
    let text = XpmBuilder::new()
        .declared_height(3)
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#FF0000", "1.0")
        .x_axis(&[0.0, 1.0])
        .y_axis(&[0.0, 1.0, 2.0])
        .row("AB")
        .row("BA")
        .build();

    assert!(matches!(
        parse_str(&text).unwrap_err(),
        XpmError::RowCountMismatch { found: 2, declared: 3 }
    ));
}

#[test]
fn test_parse_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("landscape.xpm");
    std::fs::write(&path, fixtures::continuous_2x2()).unwrap();

    let parsed = parse_file(&path).unwrap();
    assert_eq!((parsed.dataset.width, parsed.dataset.height), (2, 2));
}

#[test]
fn test_parse_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("absent.xpm")).unwrap_err();
    assert!(matches!(err, XpmError::Io(_)));
}

#[test]
fn test_no_partial_dataset_on_failure() {
    // the parse either yields a fully validated dataset or an error;
    // a missing y axis must not leak a half-filled structure
    let text = XpmBuilder::new()
        .color("A", "#FFFFFF", "0.0")
        .x_axis(&[0.0])
        .row("A")
        .build();

    assert!(matches!(
        parse_str(&text).unwrap_err(),
        XpmError::AxisLength { axis: 'y', .. }
    ));
}
