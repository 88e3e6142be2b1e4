use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::shell::config::ListLimits;
use crate::shell::state::AppState;
use crate::tests::fixtures::rows::{FIXED_DEPOSITORY_ID, FIXED_ITEM_TYPE_ID, make_lookup_entry};

/// In-memory application state with the fixed item type and depository registered.
pub async fn seeded_state() -> AppState {
    let state = AppState::in_memory(ListLimits::default());
    state
        .item_types
        .table
        .insert(make_lookup_entry(FIXED_ITEM_TYPE_ID, "Knife"))
        .await
        .unwrap();
    state
        .depositories
        .table
        .insert(make_lookup_entry(FIXED_DEPOSITORY_ID, "Main depository"))
        .await
        .unwrap();
    state
}
