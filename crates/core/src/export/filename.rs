//! Descriptive artifact names derived from the active filters.

use chrono::{DateTime, Utc};
use cardledger_shared::types::CardId;

use super::types::{ExportFormat, ExportKind};
use crate::filter::FilterParams;
use crate::records::CardRecord;

/// Characters of the search term kept in the name.
pub const QUERY_PREFIX_CHARS: usize = 20;

/// Replaces every character outside `[A-Za-z0-9-_.]` with `_`.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// UTC generation time as `YYYY-MM-DD-HH-mm-ss`.
#[must_use]
pub fn timestamp_token(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d-%H-%M-%S").to_string()
}

/// How the filtered card is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLabel {
    /// The lookup found the card.
    Named {
        /// Card name.
        name: String,
        /// Card number digits.
        last4: String,
    },
    /// The lookup found nothing.
    Unknown(CardId),
}

impl CardLabel {
    /// Label from a point lookup result.
    #[must_use]
    pub fn from_lookup(id: CardId, card: Option<&CardRecord>) -> Self {
        card.map_or(Self::Unknown(id), |c| Self::Named {
            name: c.name.clone(),
            last4: c.last4.clone(),
        })
    }

    fn part(&self) -> String {
        match self {
            Self::Named { name, last4 } => format!("card-{name}-{last4}"),
            Self::Unknown(id) => format!("card-{id}"),
        }
    }
}

/// Filter context that shapes the file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContext {
    /// Kind filter as given, for transaction exports.
    pub kind: Option<String>,
    /// Start bound as given.
    pub start: Option<String>,
    /// End bound as given.
    pub end: Option<String>,
    /// Resolved card label.
    pub card: Option<CardLabel>,
    /// Search term.
    pub query: Option<String>,
}

impl FileContext {
    /// Context from raw parameters and an optional card label.
    ///
    /// The kind filter only names transaction exports.
    #[must_use]
    pub fn from_params(kind: ExportKind, params: &FilterParams, card: Option<CardLabel>) -> Self {
        Self {
            kind: match kind {
                ExportKind::Transactions => params.kind().map(str::to_string),
                ExportKind::Monthly | ExportKind::Expenses => None,
            },
            start: params.start().map(str::to_string),
            end: params.end().map(str::to_string),
            card,
            query: params.query().map(str::to_string),
        }
    }

    /// Suffix parts in order: kind, date range, card, search term.
    #[must_use]
    pub fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(kind) = &self.kind {
            parts.push(format!("type-{kind}"));
        }
        if self.start.is_some() || self.end.is_some() {
            parts.push(format!(
                "{}_to_{}",
                self.start.as_deref().unwrap_or("start"),
                self.end.as_deref().unwrap_or("end")
            ));
        }
        if let Some(card) = &self.card {
            parts.push(card.part());
        }
        if let Some(query) = &self.query {
            let prefix: String = query.chars().take(QUERY_PREFIX_CHARS).collect();
            parts.push(format!("q-{prefix}"));
        }
        parts
    }
}

/// Builds `<kind>[_<parts>]-<timestamp>.<ext>`, sanitized.
#[must_use]
pub fn build_file_name(
    kind: ExportKind,
    format: ExportFormat,
    context: &FileContext,
    now: DateTime<Utc>,
) -> String {
    let parts = context.parts();
    let suffix = if parts.is_empty() {
        String::new()
    } else {
        format!("_{}", parts.join("_"))
    };
    let stem = sanitize_filename(&format!(
        "{}{suffix}-{}",
        kind.base_name(),
        timestamp_token(now)
    ));
    format!("{stem}.{}", format.extension())
}
