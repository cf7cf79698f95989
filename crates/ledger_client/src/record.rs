use std::str::FromStr;

use api_types::record::{RecordNew, RecordView};
use chrono::{DateTime, Utc};

use crate::Money;

/// The record category, determining which remote endpoint and which wire
/// label field apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Endpoint path segment on the remote service.
    pub fn path(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Name of the wire label field: `source` for income, `category` for
    /// expense.
    pub fn label_field(self) -> &'static str {
        match self {
            Self::Income => "source",
            Self::Expense => "category",
        }
    }

    /// Glyph attached to a draft when the user supplied none.
    pub fn default_icon(self) -> &'static str {
        match self {
            Self::Income => "💼",
            Self::Expense => "💸",
        }
    }

    /// Suggested filename for the spreadsheet export of this kind.
    pub fn export_filename(self) -> &'static str {
        match self {
            Self::Income => "income.xlsx",
            Self::Expense => "expenses.xlsx",
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown record kind: {other}")),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A persisted ledger record. Identity is the server-assigned id; records
/// are immutable once persisted except through delete.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerRecord {
    pub id: String,
    pub amount: Money,
    /// Expense category or income source, depending on the kind.
    pub label: String,
    pub date: DateTime<Utc>,
    pub icon: Option<String>,
}

impl LedgerRecord {
    pub(crate) fn from_view(kind: RecordKind, view: RecordView) -> Self {
        let label = match kind {
            RecordKind::Income => view.source,
            RecordKind::Expense => view.category,
        };
        Self {
            id: view.id,
            amount: Money::from_major(view.amount),
            label: label.unwrap_or_default(),
            date: view.date,
            icon: view.icon,
        }
    }
}

/// User input for a new record, before submission.
///
/// Validating that the amount is non-negative and the label non-empty is the
/// caller's concern; the repository submits the draft as given, defaulting
/// `date` to now and `icon` to the kind's glyph.
#[derive(Clone, Debug)]
pub struct RecordDraft {
    pub amount: Money,
    pub label: String,
    pub date: Option<DateTime<Utc>>,
    pub icon: Option<String>,
}

impl RecordDraft {
    pub fn new(amount: Money, label: impl Into<String>) -> Self {
        Self {
            amount,
            label: label.into(),
            date: None,
            icon: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub(crate) fn into_wire(self, kind: RecordKind) -> RecordNew {
        let (category, source) = match kind {
            RecordKind::Income => (None, Some(self.label)),
            RecordKind::Expense => (Some(self.label), None),
        };
        RecordNew {
            amount: self.amount.as_major(),
            date: self.date.unwrap_or_else(Utc::now),
            category,
            source,
            icon: self.icon.unwrap_or_else(|| kind.default_icon().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_paths_and_label_fields() {
        assert_eq!(RecordKind::Income.path(), "income");
        assert_eq!(RecordKind::Expense.path(), "expense");
        assert_eq!(RecordKind::Income.label_field(), "source");
        assert_eq!(RecordKind::Expense.label_field(), "category");
        assert_eq!("EXPENSE".parse::<RecordKind>().unwrap(), RecordKind::Expense);
        assert!("refund".parse::<RecordKind>().is_err());
    }

    #[test]
    fn draft_defaults_icon_per_kind() {
        let wire = RecordDraft::new(Money::new(5000), "Food").into_wire(RecordKind::Expense);
        assert_eq!(wire.amount, 50.0);
        assert_eq!(wire.category.as_deref(), Some("Food"));
        assert_eq!(wire.source, None);
        assert_eq!(wire.icon, "💸");

        let wire = RecordDraft::new(Money::new(5000), "Salary").into_wire(RecordKind::Income);
        assert_eq!(wire.source.as_deref(), Some("Salary"));
        assert_eq!(wire.category, None);
        assert_eq!(wire.icon, "💼");
    }

    #[test]
    fn view_label_follows_kind() {
        let view = RecordView {
            id: "abc".to_string(),
            amount: 12.5,
            date: Utc::now(),
            category: Some("Food".to_string()),
            source: None,
            icon: None,
        };
        let record = LedgerRecord::from_view(RecordKind::Expense, view);
        assert_eq!(record.label, "Food");
        assert_eq!(record.amount, Money::new(1250));
    }
}
