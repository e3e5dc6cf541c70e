//! Gnuplot script generation.
//!
//! The script reproduces the dataset with gnuplot alone: a discrete palette
//! in color-table order, an inline `$data` block of
//! `(aligned_x, aligned_y, symbol_index)` triples, and one labeled point per
//! table entry parked below the data range as a legend.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;
use xpm_parser::XpmDataset;

use crate::error::{ExportError, ExportResult};

/// Render the gnuplot script for a dataset.
///
/// `png_name` is the image file the script will tell gnuplot to produce.
pub fn render_script(dataset: &XpmDataset, png_name: &str) -> String {
    let axes = dataset.aligned_axes();
    let index: HashMap<&str, usize> = dataset
        .color_table
        .iter()
        .enumerate()
        .map(|(i, e)| (e.symbol.as_str(), i))
        .collect();

    let mut script = String::new();
    script.push_str("set term png\n");
    script.push_str(&format!("set output \"{png_name}\"\n"));
    script.push_str("unset colorbox\n");

    let palette = dataset
        .color_table
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{} \"{}\"", i, e.hex))
        .collect::<Vec<_>>()
        .join(",");
    script.push_str(&format!("set pal defined({palette})\n\n"));

    script.push_str("$data << EOD\n");
    for row_idx in 0..dataset.height {
        for col in 0..dataset.width {
            let symbol = dataset.symbol_at(row_idx, col).unwrap_or("");
            let value = index.get(symbol).copied().unwrap_or(0);
            script.push_str(&format!(
                "{:.6} {:.6} {:.6}\n",
                axes.x[col], axes.y[row_idx], value as f64
            ));
        }
    }
    script.push_str("EOD\n\n");

    script.push_str("#set tmargin at screen 0.95\n");
    script.push_str("#set bmargin at screen 0.20\n");
    script.push_str("#set rmargin at screen 0.85\n");
    let mut label_y = 0.92;
    for entry in &dataset.color_table {
        script.push_str(&format!(
            "#set label \"{:<10}\" at screen 0.85,{:.2} left textcolor rgb \"{}\"\n",
            entry.note, label_y, entry.hex
        ));
        label_y -= 0.10;
    }

    script.push_str(
        "set term pngcairo enhanced truecolor font \"Arial,85\" fontscale 1 \
         linewidth 20 pointscale 5 size 10000,6000\n",
    );
    script.push_str("set tics out nomirror;\n");
    script.push_str("set key out reverse Left spacing 2 samplen 1/2\n");
    script.push_str(&format!("set title \"{}\"\n", dataset.title));
    script.push_str(&format!(
        "set xlabel \"{}\"; set ylabel \"{}\";\n",
        dataset.x_label, dataset.y_label
    ));

    let (x_min, x_max) = bounds(&axes.x);
    let (y_min, y_max) = bounds(&axes.y);
    script.push_str(&format!(
        "plot [{:.2}:{:.2}] [{:.2}:{:.2}] $data u 1:2:3 w imag notit, \\\n",
        (x_min * 10.0).floor() / 10.0 - 0.1,
        (x_max * 10.0).ceil() / 10.0 + 0.1,
        (y_min * 10.0).floor() / 10.0 - 0.1,
        (y_max * 10.0).ceil() / 10.0 + 0.1,
    ));

    // one off-range point per table entry carries the legend
    let legend_y = y_min.floor() - 1.0;
    let legend_lines = dataset
        .color_table
        .iter()
        .map(|e| format!("{} w p ps 3 pt 5 lc rgb \"{}\" t\"{}\"", legend_y, e.hex, e.note))
        .collect::<Vec<_>>()
        .join(", \\\n");
    script.push_str(&legend_lines);
    script.push('\n');

    script
}

/// Write the gnuplot script to `path`, with the image name derived from the
/// script name.
///
/// Fails with [`ExportError::IoConflict`] if `path` already exists.
pub fn write_script(dataset: &XpmDataset, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ExportError::conflict(path));
    }

    let png_name = path.with_extension("png");
    let script = render_script(dataset, &png_name.display().to_string());
    std::fs::write(path, script)?;

    info!(path = %path.display(), "wrote gnuplot script");
    Ok(())
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}
