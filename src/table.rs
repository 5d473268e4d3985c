//! Grid rendering for terminal listings

/// Default number of columns for theme listings
pub const DEFAULT_COLUMNS: usize = 3;

/// Split items into rows of `columns` items; the last row may be shorter
pub fn rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items
        .chunks(columns.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Render items as a bordered grid, `columns` cells per row
///
/// Column widths fit the widest cell in each column. An empty list renders
/// as an empty string.
pub fn render_grid<S: AsRef<str>>(items: &[S], columns: usize) -> String {
    let cells: Vec<&str> = items.iter().map(|item| item.as_ref()).collect();
    let rows = rows(&cells, columns);
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut widths = vec![0; first.len()];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |left: char, mid: char, right: char| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    };

    let cells_line = |row: &[&str]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = row.get(col).copied().unwrap_or("");
                format!(" {}{} ", cell, " ".repeat(width - cell.chars().count()))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let separator = border('├', '┼', '┤');
    let body: Vec<String> = rows.iter().map(|row| cells_line(row.as_slice())).collect();

    let mut lines = vec![border('┌', '┬', '┐')];
    lines.push(body.join(&format!("\n{}\n", separator)));
    lines.push(border('└', '┴', '┘'));
    lines.join("\n")
}

/// Print items as a grid to stdout
pub fn print_grid<S: AsRef<str>>(items: &[S], columns: usize) {
    let grid = render_grid(items, columns);
    if !grid.is_empty() {
        println!("{}", grid);
    }
}
