//! Bordered grid tables for console output.
//!
//! ```text
//! +----+--------------+-------+
//! | No | Product Name | Price |
//! +====+==============+=======+
//! |  1 | Mug          |  9.99 |
//! +----+--------------+-------+
//! ```
//!
//! Each column is declared with its [`Align`]; the header follows the column.

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A table under construction.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Align)>,
        S: Into<String>,
    {
        let (headers, aligns) = columns
            .into_iter()
            .map(|(header, align)| (header.into(), align))
            .unzip();
        Self {
            headers,
            aligns,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty; extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        self
    }

    /// Renders the grid, one line per border or row, newline-terminated.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| width(&row[col]))
                    .chain(std::iter::once(width(&self.headers[col])))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&border(&widths, '-'));
        out.push_str(&line(&self.headers, &widths, &self.aligns));
        out.push_str(&border(&widths, '='));
        for row in &self.rows {
            out.push_str(&line(row, &widths, &self.aligns));
            out.push_str(&border(&widths, '-'));
        }
        out
    }
}

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize], fill: char) -> String {
    let mut out = String::from("+");
    for w in widths {
        out.extend(std::iter::repeat(fill).take(w + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let mut out = String::from("|");
    for ((cell, w), align) in cells.iter().zip(widths).zip(aligns) {
        let padding = " ".repeat(w - width(cell));
        match align {
            Align::Right => out.push_str(&format!(" {padding}{cell} |")),
            Align::Left => out.push_str(&format!(" {cell}{padding} |")),
        }
    }
    out.push('\n');
    out
}

/// Formats an amount with two decimals.
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}
