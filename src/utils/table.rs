//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with columns padded to their widest cell (display width, so
    /// accented or wide characters line up). When `max_width` is given the
    /// last column wraps onto continuation lines.
    pub fn render(&self, max_width: Option<usize>) -> String {
        let cols = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().take(cols).enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let lead: usize = widths.iter().take(cols.saturating_sub(1)).map(|w| w + 1).sum();
        let last_width = max_width.map(|m| m.saturating_sub(lead).max(20));

        let mut out = String::new();
        push_line(&mut out, &self.headers, &widths, None);
        for row in &self.rows {
            push_line(&mut out, row, &widths, last_width);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], wrap: Option<usize>) {
    let cols = widths.len();
    let mut prefix = String::new();

    for (i, width) in widths.iter().enumerate().take(cols.saturating_sub(1)) {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        prefix.push_str(cell);
        prefix.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 1));
    }

    let last = cells.get(cols.saturating_sub(1)).map(String::as_str).unwrap_or("");
    let pieces: Vec<String> = match wrap {
        Some(w) => textwrap::wrap(last, w)
            .into_iter()
            .map(|c| c.into_owned())
            .collect(),
        None => vec![last.to_string()],
    };

    let indent = " ".repeat(prefix.width());
    for (n, piece) in pieces.iter().enumerate() {
        out.push_str(if n == 0 { &prefix } else { &indent });
        out.push_str(piece);
        out.push('\n');
    }
    if pieces.is_empty() {
        out.push_str(prefix.trim_end());
        out.push('\n');
    }
}
