use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::snapshots::models::{Category, SnapshotRow};

/// Commission type of a snapshot row, resolved once per row from the invoice
/// category and the raw type hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionType {
    New,
    Upgrade,
    Prorate,
    Recurring,
    Alat,
    Setup,
}

impl CommissionType {
    pub const COUNT: usize = 6;

    /// All types, in report order.
    pub const ALL: [CommissionType; Self::COUNT] = [
        CommissionType::New,
        CommissionType::Upgrade,
        CommissionType::Prorate,
        CommissionType::Recurring,
        CommissionType::Alat,
        CommissionType::Setup,
    ];

    /// Classify a row.
    ///
    /// Equipment and setup categories win outright; home rows without a type
    /// hint are plain recurring invoices; otherwise the hint decides, with
    /// the upstream spelling "prorata" normalized to `Prorate`.
    pub fn classify(row: &SnapshotRow) -> Self {
        match row.category {
            Category::Alat => CommissionType::Alat,
            Category::Setup => CommissionType::Setup,
            Category::Home => match row.type_hint() {
                None => CommissionType::Recurring,
                Some(hint) => match hint {
                    "new" => CommissionType::New,
                    "upgrade" => CommissionType::Upgrade,
                    "prorate" | "prorata" => CommissionType::Prorate,
                    _ => CommissionType::Recurring,
                },
            },
        }
    }

    /// Stable index into fixed-size per-type arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionType::New => "new",
            CommissionType::Upgrade => "upgrade",
            CommissionType::Prorate => "prorate",
            CommissionType::Recurring => "recurring",
            CommissionType::Alat => "alat",
            CommissionType::Setup => "setup",
        }
    }
}

impl fmt::Display for CommissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
