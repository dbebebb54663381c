//! Plain-text rendering of a [`ForwardTrace`], one section per stage.

use std::fmt::{Display, Write};

use crate::network::trace::ForwardTrace;

/// Column width of every grid cell.
const CELL_WIDTH: usize = 6;

fn write_grid<T: Display>(out: &mut String, rows: &[Vec<T>]) {
    for row in rows {
        for v in row {
            let _ = write!(out, "{:>width$}", v, width = CELL_WIDTH);
        }
        out.push('\n');
    }
}

fn real_rows(rows: &[Vec<f64>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|v| format!("{v:.2}")).collect())
        .collect()
}

fn int_rows<const N: usize>(rows: &[[i8; N]]) -> Vec<Vec<i8>> {
    rows.iter().map(|row| row.to_vec()).collect()
}

/// Renders every stage of `trace` the way the console demo prints it.
pub fn render(trace: &ForwardTrace) -> String {
    let mut out = String::new();

    out.push_str("Convolutional network that classifies whether a 9x9 drawing is a 'X' or 'O'.\n");
    out.push_str("\nDrawing converted to computer-readable matrix (9x9):\n");
    write_grid(&mut out, &int_rows(&trace.input.rows()[..]));

    let _ = writeln!(out, "\nApplying {} filters to data...", trace.filters.len());
    for filter in &trace.filters {
        let _ = writeln!(out, "\n{} (3x3):", filter.name);
        write_grid(&mut out, &int_rows(&filter.weights[..]));
    }

    out.push_str("\nConvolving original input using filters...\n");
    for (i, map) in trace.feature_maps.iter().enumerate() {
        let _ = writeln!(out, "\nConvolved feature map {} ({}x{}):", i + 1, map.rows, map.cols);
        write_grid(&mut out, &real_rows(&map.data));
    }

    out.push_str("\nApplying activation layer...\n");
    for (i, map) in trace.activated_maps.iter().enumerate() {
        let _ = writeln!(out, "\nActivated feature map {} ({}x{}):", i + 1, map.rows, map.cols);
        write_grid(&mut out, &real_rows(&map.data));
    }

    out.push_str("\nPooling layers with window size = 2 and stride size = 2...\n");
    for (i, map) in trace.pooled_maps.iter().enumerate() {
        let _ = writeln!(out, "\nActivated layer {} with pooling ({}x{}):", i + 1, map.rows, map.cols);
        write_grid(&mut out, &real_rows(&map.data));
    }

    out.push_str("\nFlattening into 1 layer...\n");
    let _ = writeln!(out, "\nFeed-forward network layer (1x{}):", trace.flat.len());
    for v in &trace.flat {
        let _ = writeln!(out, "{v:.2}");
    }

    out.push_str("\nMaking final predictions and correlations...\n");
    let _ = writeln!(out, "\nConfidence that original drawing is 'X': {:.2}%", trace.confidence.x);
    let _ = writeln!(out, "Confidence that original drawing is 'O': {:.2}%", trace.confidence.o);
    let _ = writeln!(
        out,
        "\nFINAL RESULT: The CNN predicts that the original drawing resembles a '{}'.",
        trace.prediction
    );

    out
}
