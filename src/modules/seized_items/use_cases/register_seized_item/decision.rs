use crate::modules::seized_items::core::record::SeizedItemRow;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("seized item already exists")]
    AlreadyExists,

    #[error("owner must be given")]
    MissingOwner,

    #[error("count must be at least 1")]
    InvalidCount,

    #[error("item type must be given")]
    MissingItemType,

    #[error("unknown item type: {0}")]
    UnknownItemType(String),

    #[error("unknown depository: {0}")]
    UnknownDepository(String),
}

#[derive(Debug)]
pub enum Decision {
    Accepted { row: SeizedItemRow },
    Rejected { reason: DecideError },
}

/// Whether the lookup entries a command points at are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct References {
    /// On updates, `true` when the item type is not being changed.
    pub item_type_exists: bool,
    /// `true` when no depository is referenced.
    pub depository_exists: bool,
}

pub fn parse_count(number: i64) -> Result<u32, DecideError> {
    u32::try_from(number)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(DecideError::InvalidCount)
}
