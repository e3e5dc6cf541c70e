//! Canned XPM fixtures shared across the test suites.

use crate::generators::XpmBuilder;

/// 2x2 Continuous landscape with values `[[0,1],[1,0]]`, unit axes.
///
/// The canonical small fixture: symbol `A` maps to 0.0 (white), `B` to 1.0
/// (red), rows are `AB` / `BA`.
pub fn continuous_2x2() -> String {
    XpmBuilder::new()
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#FF0000", "1.0")
        .x_axis(&[0.0, 1.0])
        .y_axis(&[0.0, 1.0])
        .row("AB")
        .row("BA")
        .build()
}

/// 4x3 Continuous landscape with four distinct values and uneven terrain.
pub fn continuous_4x3() -> String {
    XpmBuilder::new()
        .title("Free Energy Surface")
        .labels("RMSD (nm)", "Rg (nm)")
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#C0C0C0", "1.0")
        .color("C", "#808080", "2.5")
        .color("D", "#000000", "4.0")
        .x_axis(&[0.0, 1.0, 2.0, 3.0])
        .y_axis(&[10.0, 20.0, 30.0])
        .row("ABCD")
        .row("BBCD")
        .row("DCBA")
        .build()
}

/// 3x1 Discrete dataset (secondary-structure style legend).
pub fn discrete_3x1() -> String {
    XpmBuilder::new()
        .title("Secondary structure")
        .legend("")
        .type_str("Discrete")
        .labels("Time (ps)", "Residue")
        .color("H", "#FF0000", "Helix")
        .color("E", "#FFFF00", "Sheet")
        .color("C", "#FFFFFF", "Coil")
        .x_axis(&[0.0, 1.0, 2.0])
        .y_axis(&[0.0])
        .row("HEC")
        .build()
}

/// 2x1 Continuous dataset whose second note is not numeric.
pub fn continuous_bad_note_2x1() -> String {
    XpmBuilder::new()
        .color("A", "#FFFFFF", "0.5")
        .color("B", "#FF0000", "n/a")
        .x_axis(&[0.0, 1.0])
        .y_axis(&[0.0])
        .row("AB")
        .build()
}

/// 2x1 Continuous dataset with a non-numeric note on an entry that never
/// appears in the pixel rows.
pub fn continuous_unused_bad_note_2x1() -> String {
    XpmBuilder::new()
        .color("A", "#FFFFFF", "0.5")
        .color("B", "#FF0000", "n/a")
        .x_axis(&[0.0, 1.0])
        .y_axis(&[0.0])
        .row("AA")
        .build()
}

/// 2x2 Continuous dataset whose x axis carries `width + 1` boundary values.
pub fn continuous_boundary_axes_2x2() -> String {
    XpmBuilder::new()
        .color("A", "#FFFFFF", "0.0")
        .color("B", "#FF0000", "1.0")
        .x_axis(&[0.0, 1.0, 2.0])
        .y_axis(&[0.0, 1.0])
        .row("AB")
        .row("BA")
        .build()
}
