//! Telegram-HTML rendering of diffs and listings.
//!
//! Every render is split into blocks no longer than the configured message
//! budget. Blocks concatenated in order reproduce the full report text.

use std::fmt::{Display, Write};

use crate::domain::{DiffResult, Entry};
use crate::error::FormatError;

/// Renders reports and splits them to the transport's message size.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    /// Name of the tracked quantity, e.g. `ETH`.
    title: String,
    top_n: usize,
    max_message_len: usize,
}

impl ReportFormatter {
    pub fn new(title: impl Into<String>, top_n: usize, max_message_len: usize) -> Self {
        Self {
            title: title.into(),
            top_n,
            max_message_len,
        }
    }

    /// Render a diff. An empty diff renders to no blocks.
    pub fn format_diff(&self, diff: &DiffResult) -> Result<Vec<String>, FormatError> {
        if diff.is_empty() {
            return Ok(Vec::new());
        }

        let mut text = String::new();
        writeln!(
            text,
            "🔔 <b>Top-{} {} list changed</b>",
            self.top_n,
            escape_html(&self.title)
        )?;

        if !diff.entrants.is_empty() {
            writeln!(text, "\n<b>➕ New in top-{}:</b>", self.top_n)?;
            for entrant in &diff.entrants {
                writeln!(
                    text,
                    "{:3}. <code>{}</code>",
                    entrant.new_rank,
                    escape_html(entrant.identity.as_str())
                )?;
            }
        }

        if !diff.exits.is_empty() {
            writeln!(text, "\n<b>➖ Removed from top-{}:</b>", self.top_n)?;
            for exit in &diff.exits {
                writeln!(
                    text,
                    "{:3}. <code>{}</code>",
                    exit.old_rank,
                    escape_html(exit.identity.as_str())
                )?;
            }
        }

        if !diff.rank_changes.is_empty() {
            writeln!(text, "\n<b>🔀 Rank changes:</b>")?;
            for change in &diff.rank_changes {
                let arrow = if change.moved_up() { "↑" } else { "↓" };
                writeln!(
                    text,
                    "{:3}. <code>{}</code> {} ({} → {})",
                    change.new_rank,
                    escape_html(change.identity.as_str()),
                    arrow,
                    change.old_rank,
                    change.new_rank
                )?;
            }
        }

        chunk_text(&text, self.max_message_len)
    }

    /// Render the whole leaderboard.
    pub fn format_full(&self, entries: &[Entry]) -> Result<Vec<String>, FormatError> {
        chunk_text(&self.render_full(entries)?, self.max_message_len)
    }

    /// Render an operator-facing failure warning.
    pub fn format_failure(&self, error: &dyn Display) -> Result<Vec<String>, FormatError> {
        let mut text = String::new();
        writeln!(text, "⚠️ <b>holdwatch error</b>")?;
        write!(text, "{}", escape_html(&error.to_string()))?;
        chunk_text(&text, self.max_message_len)
    }

    /// Unchunked full listing.
    pub fn render_full(&self, entries: &[Entry]) -> Result<String, FormatError> {
        let mut text = String::new();
        writeln!(
            text,
            "📋 <b>Top {} {} holders (snapshot)</b>\n",
            self.top_n,
            escape_html(&self.title)
        )?;
        for entry in entries {
            write!(
                text,
                "<b>{:3}.</b> <code>{}</code> — {}",
                entry.rank,
                escape_html(entry.identity.as_str()),
                escape_html(&entry.display)
            )?;
            if let Some(share) = entry.share {
                write!(text, " ({share:.2}%)")?;
            }
            if let Some(label) = &entry.label {
                write!(text, " — {}", escape_html(label))?;
            }
            text.push('\n');
        }
        Ok(text)
    }
}

/// Split `text` into blocks of at most `max_chars` characters.
///
/// Blocks break after a newline where possible; a single line longer than
/// the budget is split on character boundaries.
pub fn chunk_text(text: &str, max_chars: usize) -> Result<Vec<String>, FormatError> {
    if max_chars == 0 {
        return Err(FormatError::InvalidBudget);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();

        if current_len + line_len > max_chars && current_len > 0 {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= max_chars {
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        for ch in line.chars() {
            if current_len == max_chars {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(ch);
            current_len += 1;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    Ok(chunks)
}

/// Escape text for Telegram's HTML parse mode.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entrant, Exit, Identity, RankChange};

    fn formatter(max: usize) -> ReportFormatter {
        ReportFormatter::new("ETH", 100, max)
    }

    #[test]
    fn test_empty_diff_has_no_blocks() {
        let blocks = formatter(3800).format_diff(&DiffResult::default()).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_diff_sections() {
        let diff = DiffResult {
            rank_changes: vec![RankChange {
                identity: Identity::new("0xb"),
                old_rank: 2,
                new_rank: 1,
            }],
            entrants: vec![Entrant {
                identity: Identity::new("0xd"),
                new_rank: 3,
            }],
            exits: vec![Exit {
                identity: Identity::new("0xc"),
                old_rank: 3,
            }],
        };
        let blocks = formatter(3800).format_diff(&diff).unwrap();
        assert_eq!(blocks.len(), 1);
        let text = &blocks[0];
        assert!(text.starts_with("🔔 <b>Top-100 ETH list changed</b>"));
        assert!(text.contains("➕ New in top-100:</b>\n  3. <code>0xd</code>"));
        assert!(text.contains("➖ Removed from top-100:</b>\n  3. <code>0xc</code>"));
        assert!(text.contains("  1. <code>0xb</code> ↑ (2 → 1)"));
    }

    #[test]
    fn test_full_listing_chunks_reassemble() {
        let entries: Vec<Entry> = (1..=100)
            .map(|rank| {
                Entry::new(&format!("0x{rank:040x}"), rank, 1000.0, "1,000 ETH")
                    .with_share(Some(0.5))
                    .with_label(Some("Exchange <hot>".into()))
            })
            .collect();
        let f = formatter(500);
        let full = f.render_full(&entries).unwrap();
        let blocks = f.format_full(&entries).unwrap();

        assert!(blocks.len() > 1);
        assert!(blocks.iter().all(|b| b.chars().count() <= 500));
        assert_eq!(blocks.concat(), full);
        assert!(full.contains("Exchange &lt;hot&gt;"));
        assert!(full.contains("(0.50%)"));
    }

    #[test]
    fn test_chunk_hard_splits_long_line() {
        let text = format!("short\n{}\ntail", "x".repeat(25));
        let chunks = chunk_text(&text, 10).unwrap();
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert_eq!(chunks.concat(), text);
        assert_eq!(chunks[0], "short\n");
    }

    #[test]
    fn test_chunk_counts_characters_not_bytes() {
        let text = "ééééé\nééééé\n";
        let chunks = chunk_text(text, 6).unwrap();
        assert_eq!(chunks, vec!["ééééé\n", "ééééé\n"]);
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(matches!(chunk_text("x", 0), Err(FormatError::InvalidBudget)));
    }

    #[test]
    fn test_failure_is_escaped() {
        let blocks = formatter(3800).format_failure(&"bad <tag>").unwrap();
        assert!(blocks[0].contains("bad &lt;tag&gt;"));
    }
}
