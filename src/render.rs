//! Text layouts for printing cards.

use tracing::instrument;

/// Output format for a printed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardFormat {
    /// Right-aligned columns of plain text.
    #[default]
    Plain,
    /// A markdown table with a blank header row.
    Markdown,
}

/// Lays out card numbers in rows of a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    columns: usize,
}

impl CardLayout {
    /// Creates a layout; a column count of zero is treated as one.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Splits numbers into display rows.
    pub fn rows<'a>(&self, numbers: &'a [u64]) -> std::slice::Chunks<'a, u64> {
        numbers.chunks(self.columns)
    }

    /// Renders numbers in the requested format.
    pub fn render(&self, numbers: &[u64], format: CardFormat) -> String {
        match format {
            CardFormat::Plain => self.plain(numbers),
            CardFormat::Markdown => self.markdown(numbers),
        }
    }

    /// Right-aligned plain text, one row per line.
    #[instrument(skip(numbers), fields(count = numbers.len()))]
    pub fn plain(&self, numbers: &[u64]) -> String {
        let width = numbers
            .iter()
            .map(|n| n.to_string().len())
            .max()
            .unwrap_or(1);

        self.rows(numbers)
            .map(|row| {
                row.iter()
                    .map(|n| format!("{:>width$}", n, width = width))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Markdown table; the last row is padded with empty cells.
    #[instrument(skip(numbers), fields(count = numbers.len()))]
    pub fn markdown(&self, numbers: &[u64]) -> String {
        let mut table = String::new();
        table.push('|');
        table.push_str(&"  |".repeat(self.columns));
        table.push('\n');
        table.push('|');
        table.push_str(&" --- |".repeat(self.columns));
        table.push('\n');

        for row in self.rows(numbers) {
            table.push('|');
            for n in row {
                table.push_str(&format!(" {} |", n));
            }
            for _ in row.len()..self.columns {
                table.push_str("  |");
            }
            table.push('\n');
        }
        table
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::new(8)
    }
}
