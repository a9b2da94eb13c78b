use console::{Alignment, Style, measure_text_width, pad_str};

use crate::video::VideoInfo;

const HEADERS: [&str; 4] = ["Name", "Datetime", "Length(H:M:S)", "Size(MB)"];

/// Right-aligned video table: name, datetime, length, size
pub struct VideoTable {
    rows: Vec<[String; 4]>,
}

impl VideoTable {
    pub fn new(videos: &[VideoInfo]) -> Self {
        let rows = videos
            .iter()
            .map(|v| {
                [
                    v.name.clone(),
                    v.modified_display(),
                    v.duration_display(),
                    v.size_display(),
                ]
            })
            .collect();
        Self { rows }
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = HEADERS.map(measure_text_width);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }
        widths
    }

    /// Lines without a trailing newline
    pub fn render(&self) -> Vec<String> {
        let widths = self.widths();
        let styles = [
            Style::new().cyan(),
            Style::new().magenta(),
            Style::new().green(),
            Style::new().green(),
        ];
        let border = widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("┼");

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(join_cells(
            HEADERS
                .iter()
                .zip(widths)
                .map(|(h, w)| Style::new().bold().apply_to(pad(h, w)).to_string()),
        ));
        lines.push(border);
        for row in &self.rows {
            lines.push(join_cells(
                row.iter()
                    .zip(widths)
                    .zip(&styles)
                    .map(|((cell, w), s)| s.apply_to(pad(cell, w)).to_string()),
            ));
        }
        lines
    }

    pub fn print(&self) {
        for line in self.render() {
            println!("{}", line);
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Right, None).into_owned()
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    let cells: Vec<String> = cells.map(|c| format!(" {} ", c)).collect();
    cells.join("│")
}
