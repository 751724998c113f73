#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Plain-text table with left-aligned text and right-aligned numbers.
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let widths = self.column_widths(options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let divider = "-".repeat(header_line.chars().count());

        let mut lines = vec![header_line, divider];
        for row in &self.rows {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let text = truncate(row.get(index).map_or("-", String::as_str), *width);
                    let numeric = looks_numeric(&text);
                    let cell = pad(&text, *width, numeric);
                    if options.color {
                        colorize_keyword(&cell, &text)
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>();
            lines.push(cells.join(SEPARATOR));
        }
        lines.join("\n")
    }

    fn column_widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let mut widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count(), MIN_COLUMN])
                    .max()
                    .unwrap_or(MIN_COLUMN)
            })
            .collect::<Vec<_>>();

        let Some(max_width) = max_width else {
            return widths;
        };

        // Shrink the widest shrinkable column one char at a time.
        let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
        while widths.iter().sum::<usize>() + separators > max_width {
            let floor = |index: usize| self.headers[index].chars().count().max(MIN_COLUMN);
            let widest = widths
                .iter()
                .enumerate()
                .filter(|(index, width)| **width > floor(*index))
                .max_by_key(|(_, width)| **width)
                .map(|(index, _)| index);
            match widest {
                Some(index) => widths[index] -= 1,
                None => break,
            }
        }
        widths
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn colorize_keyword(cell: &str, text: &str) -> String {
    let code = match text {
        "read_write" | "true" => "32",
        "read_only" => "33",
        "empty_field" | "not_found" | "invalid_value" | "false" => "31",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}
