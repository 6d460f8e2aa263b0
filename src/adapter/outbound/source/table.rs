//! Ranked-table extraction from leaderboard HTML.
//!
//! The table is located by its header cells rather than its position on the
//! page, and columns are mapped by header name with a positional fallback.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::Entry;

/// Header names that identify the ranked table.
#[derive(Debug, Clone)]
pub struct TableHeaders {
    pub rank: String,
    pub identity: String,
}

impl Default for TableHeaders {
    fn default() -> Self {
        Self {
            rank: "rank".into(),
            identity: "address".into(),
        }
    }
}

struct Selectors {
    table: Selector,
    header: Selector,
    row: Selector,
    cell: Selector,
    link: Selector,
}

impl Selectors {
    fn build() -> Option<Self> {
        Some(Self {
            table: Selector::parse("table").ok()?,
            header: Selector::parse("th").ok()?,
            row: Selector::parse("tr").ok()?,
            cell: Selector::parse("td, th").ok()?,
            link: Selector::parse("a").ok()?,
        })
    }
}

/// Column positions within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    rank: usize,
    identity: usize,
    quantity: usize,
    share: Option<usize>,
    label: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &[String], wanted: &TableHeaders) -> Option<Self> {
        let find = |needle: &str| headers.iter().position(|h| h.contains(needle));

        let rank = find(&wanted.rank.to_lowercase())?;
        let identity = find(&wanted.identity.to_lowercase())?;
        let quantity = find("balance");
        let share = find("percent")
            .or_else(|| find("%"))
            .or(if quantity.is_none() { Some(3) } else { None });

        Some(Self {
            rank,
            identity,
            quantity: quantity.unwrap_or(2),
            share,
            label: find("name tag").or_else(|| find("label")),
        })
    }
}

/// Extract ranked rows from the first table whose headers match.
///
/// Returns `None` when no table on the page carries the expected headers.
/// Malformed rows are skipped; the result is sorted by rank.
#[must_use]
pub fn parse_ranked_table(html: &str, wanted: &TableHeaders) -> Option<Vec<Entry>> {
    let selectors = Selectors::build()?;
    let document = Html::parse_document(html);

    let (table, columns) = document.select(&selectors.table).find_map(|table| {
        let headers: Vec<String> = table
            .select(&selectors.header)
            .map(|th| cell_text(th).to_lowercase())
            .collect();
        Columns::from_headers(&headers, wanted).map(|columns| (table, columns))
    })?;

    let mut entries = Vec::new();
    for row in table.select(&selectors.row) {
        let cells: Vec<ElementRef<'_>> = row.select(&selectors.cell).collect();
        if cells.len() < 3 {
            continue;
        }
        match parse_row(&cells, columns, &selectors) {
            Some(entry) => entries.push(entry),
            None => debug!(cells = cells.len(), "Skipping malformed leaderboard row"),
        }
    }

    entries.sort_by_key(|e| e.rank);
    Some(entries)
}

fn parse_row(cells: &[ElementRef<'_>], columns: Columns, selectors: &Selectors) -> Option<Entry> {
    let rank = parse_rank(&cell_text(*cells.get(columns.rank)?))?;

    let identity_cell = *cells.get(columns.identity)?;
    let identity = identity_cell
        .select(&selectors.link)
        .next()
        .map(cell_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| cell_text(identity_cell));
    if identity.is_empty() {
        return None;
    }

    let display = cell_text(*cells.get(columns.quantity)?);
    let quantity = parse_quantity(&display)?;

    let share = columns
        .share
        .and_then(|i| cells.get(i))
        .and_then(|c| parse_share(&cell_text(*c)));
    let label = columns
        .label
        .and_then(|i| cells.get(i))
        .map(|c| cell_text(*c));

    Some(
        Entry::new(&identity, rank, quantity, display)
            .with_share(share)
            .with_label(label),
    )
}

fn cell_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Digits of a rank cell, e.g. `"#12"` -> 12. Zero is not a rank.
fn parse_rank(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok().filter(|rank| *rank > 0)
}

/// Numeric part of a balance cell, e.g. `"1,234.5 ETH"` -> 1234.5.
fn parse_quantity(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let token = cleaned.split_whitespace().next()?;
    token
        .trim_end_matches(|c: char| c.is_alphabetic())
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite())
}

fn parse_share(text: &str) -> Option<f64> {
    text.replace(['%', ','], "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite())
}
