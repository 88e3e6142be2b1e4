use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle of a seized item. Serialized as the short codes the registry
/// has always stored (`DEP`, `RET`, `DIS`, `FWD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeizedItemStatus {
    #[default]
    #[serde(rename = "DEP")]
    Deposited,
    #[serde(rename = "RET")]
    Returned,
    #[serde(rename = "DIS")]
    Disposed,
    #[serde(rename = "FWD")]
    Forwarded,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown seized item status: {0}")]
pub struct UnknownStatus(pub String);

impl SeizedItemStatus {
    pub const ALL: [SeizedItemStatus; 4] = [
        SeizedItemStatus::Deposited,
        SeizedItemStatus::Returned,
        SeizedItemStatus::Disposed,
        SeizedItemStatus::Forwarded,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SeizedItemStatus::Deposited => "DEP",
            SeizedItemStatus::Returned => "RET",
            SeizedItemStatus::Disposed => "DIS",
            SeizedItemStatus::Forwarded => "FWD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeizedItemStatus::Deposited => "deposited",
            SeizedItemStatus::Returned => "returned to owner",
            SeizedItemStatus::Disposed => "disposed of/destroyed",
            SeizedItemStatus::Forwarded => "forwarded",
        }
    }

    /// Only a return to the owner carries a return date and the person responsible.
    pub fn records_return(self) -> bool {
        matches!(self, SeizedItemStatus::Returned)
    }
}

impl fmt::Display for SeizedItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SeizedItemStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        SeizedItemStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
