use serde::{Deserialize, Serialize};
use std::fmt;

/// Product/service line of a subscription, mapped from the fixed
/// service-identifier table. Only the three named lines are tracked in
/// per-service breakdowns; `Other` contributes to totals only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLine {
    Nusafiber,
    NusaSelecta,
    Home,
    Other,
}

impl ServiceLine {
    /// The lines that get their own breakdown entry, in report order.
    pub const TRACKED: [ServiceLine; 3] = [
        ServiceLine::Home,
        ServiceLine::Nusafiber,
        ServiceLine::NusaSelecta,
    ];

    /// Map a service identifier onto its line. Unknown identifiers are
    /// `Other` rather than an error.
    pub fn from_service_id(service_id: &str) -> Self {
        match service_id {
            "BFLITE" => ServiceLine::Nusafiber,
            "NFSP030" | "FSP100" | "NFSP100" | "NFSP200" => ServiceLine::NusaSelecta,
            "HOME100" | "HOMEADV200" | "HOMEADV" | "HOMEPREM300" => ServiceLine::Home,
            _ => ServiceLine::Other,
        }
    }

    /// Index into the fixed `TRACKED` breakdown array; `None` for `Other`.
    pub fn tracked_index(&self) -> Option<usize> {
        ServiceLine::TRACKED.iter().position(|line| line == self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLine::Nusafiber => "Nusafiber",
            ServiceLine::NusaSelecta => "NusaSelecta",
            ServiceLine::Home => "Home",
            ServiceLine::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
