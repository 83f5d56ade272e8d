// A snapshot row is one invoiced line item captured from the upstream
// invoicing system. Rows are immutable engine input: the data-access layer
// fetches them for one employee and one commission period, and the engine
// only reads them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::Money;

/// Invoice category of a snapshot row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Subscription line (fiber / home internet products)
    Home,
    /// One-off installation charge
    Setup,
    /// Equipment ("alat") sale
    Alat,
}

impl Category {
    /// Lossy parse: anything unrecognized falls back to `Home`, which keeps
    /// classification on the hint-driven path instead of failing the row.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "setup" => Category::Setup,
            "alat" => Category::Alat,
            _ => Category::Home,
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_str_lossy(&s))
    }
}

/// Contractual status of an employee for a commission period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentStatus {
    Permanent,
    Probation,
    Contract,
    /// Unrecognized or absent status; achievement reports "N/A" and no
    /// recurring-rate discount applies
    Unknown,
}

impl EmploymentStatus {
    /// Parse a nullable status string from the HR system. Matching is exact:
    /// anything other than the three known statuses maps to `Unknown`.
    pub fn parse(status: Option<&str>) -> Self {
        match status {
            Some("Permanent") => EmploymentStatus::Permanent,
            Some("Probation") => EmploymentStatus::Probation,
            Some("Contract") => EmploymentStatus::Contract,
            _ => EmploymentStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Permanent => "Permanent",
            EmploymentStatus::Probation => "Probation",
            EmploymentStatus::Contract => "Contract",
            EmploymentStatus::Unknown => "N/A",
        }
    }
}

/// One invoiced line item from the snapshot table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRow {
    /// Row identifier (invoice line key)
    pub ai: String,

    /// Customer identifier; ties equipment rows to setup rows
    pub customer_id: String,

    /// Service identifier (e.g. "BFLITE", "NFSP030"); drives rate lookup and
    /// service-line classification
    pub service_id: String,

    /// Invoice category
    pub category: Category,

    /// Raw transaction type hint from the upstream system
    /// ("new" / "upgrade" / "prorata" / "recurring"); absent for plain
    /// recurring home invoices
    #[serde(rename = "type", default)]
    pub type_hint: Option<String>,

    /// Monthly recurring charge
    #[serde(default, deserialize_with = "de_lossy_decimal")]
    pub mrc: Option<Decimal>,

    /// Tax-excluded invoiced amount, the commission base
    #[serde(default, deserialize_with = "de_lossy_decimal")]
    pub dpp: Option<Decimal>,

    /// Contract duration in months
    #[serde(rename = "month", default, deserialize_with = "de_lossy_months")]
    pub months: Option<i64>,

    /// Soft-delete flag; deleted rows contribute nothing
    #[serde(default)]
    pub is_deleted: bool,

    #[serde(default)]
    pub period_start: Option<NaiveDate>,

    #[serde(default)]
    pub period_end: Option<NaiveDate>,
}

impl SnapshotRow {
    /// Commission base; missing value coerces to zero
    pub fn dpp(&self) -> Decimal {
        self.dpp.unwrap_or(Decimal::ZERO)
    }

    /// Monthly recurring charge; missing value coerces to zero
    pub fn mrc(&self) -> Decimal {
        self.mrc.unwrap_or(Decimal::ZERO)
    }

    /// Contract duration; missing or non-positive values coerce to 1 month
    pub fn months(&self) -> i64 {
        match self.months {
            Some(m) if m > 0 => m,
            _ => 1,
        }
    }

    /// Type hint with empty strings treated as absent
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Malformed numeric input coerces to zero instead of failing the row.
fn de_lossy_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(|v| Money::coerce(Some(v))))
}

fn de_lossy_months<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
