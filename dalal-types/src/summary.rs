//! Summary rows and tables produced by the batch builder.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DalalError;
use crate::snapshot::TickerSnapshot;
use crate::symbol::Symbol;

/// Literal rendered in place of any missing or failed field.
pub const ABSENT: &str = "N/A";

/// Column names of a summary table, in schema order.
pub const COLUMNS: [&str; 10] = [
    "Name",
    "Symbol",
    "Sector",
    "Industry",
    "Previous Close",
    "Open",
    "Day High",
    "Day Low",
    "52-Week Low",
    "52-Week High",
];

/// One registry entry joined with the snapshot fields fetched for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Company display name from the registry.
    pub name: String,
    /// Ticker symbol from the registry.
    pub symbol: Symbol,
    /// Sector classification.
    pub sector: Option<String>,
    /// Industry classification.
    pub industry: Option<String>,
    /// Previous session close.
    pub previous_close: Option<Decimal>,
    /// Current session open.
    pub open: Option<Decimal>,
    /// Current session high.
    pub day_high: Option<Decimal>,
    /// Current session low.
    pub day_low: Option<Decimal>,
    /// Trailing 52-week low.
    pub fifty_two_week_low: Option<Decimal>,
    /// Trailing 52-week high.
    pub fifty_two_week_high: Option<Decimal>,
}

impl SummaryRow {
    /// Build a row from a registry pair and the snapshot fetched for it.
    pub fn from_snapshot(name: impl Into<String>, symbol: Symbol, snap: TickerSnapshot) -> Self {
        Self {
            name: name.into(),
            symbol,
            sector: snap.sector,
            industry: snap.industry,
            previous_close: snap.previous_close,
            open: snap.open,
            day_high: snap.day_high,
            day_low: snap.day_low,
            fifty_two_week_low: snap.fifty_two_week_low,
            fifty_two_week_high: snap.fifty_two_week_high,
        }
    }

    /// A row whose snapshot fetch failed: every snapshot-derived field is absent.
    pub fn unavailable(name: impl Into<String>, symbol: Symbol) -> Self {
        Self::from_snapshot(name, symbol, TickerSnapshot::default())
    }

    /// Sector used for ordering; absent sectors compare as [`ABSENT`].
    #[must_use]
    pub fn sector_key(&self) -> &str {
        self.sector.as_deref().unwrap_or(ABSENT)
    }

    /// Render the row as display cells in [`COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [String; 10] {
        fn text(v: Option<&str>) -> String {
            v.unwrap_or(ABSENT).to_string()
        }
        fn num(v: Option<Decimal>) -> String {
            v.map_or_else(|| ABSENT.to_string(), |d| d.to_string())
        }
        [
            self.name.clone(),
            self.symbol.to_string(),
            text(self.sector.as_deref()),
            text(self.industry.as_deref()),
            num(self.previous_close),
            num(self.open),
            num(self.day_high),
            num(self.day_low),
            num(self.fifty_two_week_low),
            num(self.fifty_two_week_high),
        ]
    }

    /// Parse a row back from cells in [`COLUMNS`] order; [`ABSENT`] becomes `None`.
    ///
    /// # Errors
    /// Returns `Data` if the cell count is wrong or a numeric cell does not parse,
    /// and `InvalidArg` if the symbol cell is not a valid symbol.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, DalalError> {
        if cells.len() != COLUMNS.len() {
            return Err(DalalError::Data(format!(
                "expected {} columns, found {}",
                COLUMNS.len(),
                cells.len()
            )));
        }
        let cell = |i: usize| cells[i].as_ref();
        let text = |i: usize| match cell(i) {
            ABSENT => None,
            s => Some(s.to_string()),
        };
        let num = |i: usize| -> Result<Option<Decimal>, DalalError> {
            match cell(i) {
                ABSENT => Ok(None),
                s => s.parse::<Decimal>().map(Some).map_err(|e| {
                    DalalError::Data(format!("column '{}': cannot parse '{s}': {e}", COLUMNS[i]))
                }),
            }
        };
        Ok(Self {
            name: cell(0).to_string(),
            symbol: Symbol::new(cell(1))?,
            sector: text(2),
            industry: text(3),
            previous_close: num(4)?,
            open: num(5)?,
            day_high: num(6)?,
            day_low: num(7)?,
            fifty_two_week_low: num(8)?,
            fifty_two_week_high: num(9)?,
        })
    }

    /// Whether every snapshot-derived field is absent.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        self.sector.is_none()
            && self.industry.is_none()
            && self.previous_close.is_none()
            && self.open.is_none()
            && self.day_high.is_none()
            && self.day_low.is_none()
            && self.fifty_two_week_low.is_none()
            && self.fifty_two_week_high.is_none()
    }
}

/// Ordered sequence of summary rows sharing the [`COLUMNS`] schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Wrap rows in their current order.
    #[must_use]
    pub const fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    /// Rows in table order.
    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Consume the table, yielding its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<SummaryRow> {
        self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, SummaryRow> {
        self.rows.iter()
    }

    /// Row for `symbol`, if present.
    #[must_use]
    pub fn find(&self, symbol: &Symbol) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| &r.symbol == symbol)
    }

    /// A new table ordered by ascending sector; absent sectors compare as [`ABSENT`].
    ///
    /// The sort is stable and leaves `self` untouched.
    #[must_use]
    pub fn sort_by_sector(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| compare_sector(a, b));
        Self { rows }
    }
}

fn compare_sector(a: &SummaryRow, b: &SummaryRow) -> Ordering {
    a.sector_key().cmp(b.sector_key())
}

impl FromIterator<SummaryRow> for SummaryTable {
    fn from_iter<I: IntoIterator<Item = SummaryRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SummaryTable {
    type Item = &'a SummaryRow;
    type IntoIter = std::slice::Iter<'a, SummaryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for SummaryTable {
    type Item = SummaryRow;
    type IntoIter = std::vec::IntoIter<SummaryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, sym: &str, sector: Option<&str>) -> SummaryRow {
        SummaryRow {
            sector: sector.map(str::to_string),
            ..SummaryRow::unavailable(name, Symbol::new(sym).unwrap())
        }
    }

    #[test]
    fn absent_sector_sorts_under_n() {
        let t = SummaryTable::new(vec![
            row("Tata Steel", "TATASTEEL.NS", Some("Basic Materials")),
            row("Mystery", "MYST.NS", None),
            row("Infosys", "INFY.NS", Some("Technology")),
            row("HDFC Bank", "HDFCBANK.NS", Some("Financial Services")),
            row("Nestle", "NESTLEIND.NS", Some("Consumer Defensive")),
        ]);
        let sorted = t.sort_by_sector();
        let names: Vec<_> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Tata Steel", "Nestle", "HDFC Bank", "Mystery", "Infosys"]
        );
        // input untouched
        assert_eq!(t.rows()[1].name, "Mystery");
    }

    #[test]
    fn ties_keep_input_order() {
        let t = SummaryTable::new(vec![
            row("Infosys", "INFY.NS", Some("Technology")),
            row("HDFC Bank", "HDFCBANK.NS", Some("Financial Services")),
            row("Wipro", "WIPRO.NS", Some("Technology")),
            row("TCS", "TCS.NS", Some("Technology")),
        ]);
        let sorted = t.sort_by_sector();
        let names: Vec<_> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["HDFC Bank", "Infosys", "Wipro", "TCS"]);
    }

    #[test]
    fn unavailable_row_renders_absent_marker() {
        let r = SummaryRow::unavailable("Wipro", Symbol::new("WIPRO.NS").unwrap());
        let cells = r.cells();
        assert_eq!(cells[0], "Wipro");
        assert_eq!(cells[1], "WIPRO.NS");
        assert!(cells[2..].iter().all(|c| c == ABSENT));
        assert!(r.is_unavailable());
    }

    #[test]
    fn cells_parse_back() {
        let snap = TickerSnapshot {
            sector: Some("Technology".into()),
            previous_close: Some(Decimal::new(15_000, 1)),
            ..TickerSnapshot::default()
        };
        let r = SummaryRow::from_snapshot("Infosys", Symbol::new("INFY.NS").unwrap(), snap);
        let back = SummaryRow::from_cells(&r.cells()).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn from_cells_rejects_bad_input() {
        let short = ["Infosys", "INFY.NS"];
        assert!(matches!(
            SummaryRow::from_cells(&short),
            Err(DalalError::Data(_))
        ));
        let mut cells = SummaryRow::unavailable("Infosys", Symbol::new("INFY.NS").unwrap()).cells();
        cells[4] = "abc".into();
        assert!(matches!(
            SummaryRow::from_cells(&cells),
            Err(DalalError::Data(_))
        ));
    }
}
