use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interceptors::AppError;

/// Station types offered by the lounge. Each category owns an independent
/// FIFO waitlist; an entry never moves between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationCategory {
    #[serde(rename = "PCs")]
    Pcs,
    Consoles,
    Simuladores,
    #[serde(rename = "VRs")]
    Vrs,
}

impl StationCategory {
    /// Canonical label, also the value persisted in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationCategory::Pcs => "PCs",
            StationCategory::Consoles => "Consoles",
            StationCategory::Simuladores => "Simuladores",
            StationCategory::Vrs => "VRs",
        }
    }
}

impl fmt::Display for StationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PCs" => Ok(StationCategory::Pcs),
            "Consoles" => Ok(StationCategory::Consoles),
            "Simuladores" => Ok(StationCategory::Simuladores),
            "VRs" => Ok(StationCategory::Vrs),
            other => Err(AppError::ValidationError(format!(
                "Unknown station category: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        let all = [
            StationCategory::Pcs,
            StationCategory::Consoles,
            StationCategory::Simuladores,
            StationCategory::Vrs,
        ];
        for category in all {
            assert_eq!(category.as_str().parse::<StationCategory>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("Arcades".parse::<StationCategory>().is_err());
        assert!("pcs".parse::<StationCategory>().is_err());
    }

    #[test]
    fn serde_uses_canonical_labels() {
        let json = serde_json::to_string(&StationCategory::Vrs).unwrap();
        assert_eq!(json, "\"VRs\"");

        let parsed: StationCategory = serde_json::from_str("\"Simuladores\"").unwrap();
        assert_eq!(parsed, StationCategory::Simuladores);
    }
}
