use crate::modules::lookups::adapters::outbound::lookup_table_in_memory::InMemoryLookupTable;
use crate::modules::lookups::core::entry::LookupKind;
use crate::modules::lookups::use_cases::create_lookup_entry::handler::CreateLookupEntryHandler;
use crate::modules::lookups::use_cases::delete_lookup_entry::handler::DeleteLookupEntryHandler;
use crate::modules::lookups::use_cases::update_lookup_entry::handler::UpdateLookupEntryHandler;
use crate::modules::seized_items::adapters::outbound::seized_item_store_in_memory::InMemorySeizedItemStore;
use crate::modules::seized_items::use_cases::delete_seized_item::handler::DeleteSeizedItemHandler;
use crate::modules::seized_items::use_cases::list_seized_items::queries_port::SeizedItemQueries;
use crate::modules::seized_items::use_cases::register_seized_item::handler::RegisterSeizedItemHandler;
use crate::modules::seized_items::use_cases::update_seized_item::handler::UpdateSeizedItemHandler;
use crate::shell::config::ListLimits;
use std::sync::Arc;

#[derive(Clone)]
pub struct LookupHandlers {
    pub table: Arc<InMemoryLookupTable>,
    pub create_handler: Arc<CreateLookupEntryHandler<InMemoryLookupTable>>,
    pub update_handler: Arc<UpdateLookupEntryHandler<InMemoryLookupTable>>,
    pub delete_handler:
        Arc<DeleteLookupEntryHandler<InMemoryLookupTable, InMemorySeizedItemStore>>,
}

impl LookupHandlers {
    fn new(table: Arc<InMemoryLookupTable>, store: Arc<InMemorySeizedItemStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateLookupEntryHandler::new(table.clone())),
            update_handler: Arc::new(UpdateLookupEntryHandler::new(table.clone())),
            delete_handler: Arc::new(DeleteLookupEntryHandler::new(table.clone(), store)),
            table,
        }
    }

    /// Zones check their zone type against the live zone types.
    fn referencing(
        table: Arc<InMemoryLookupTable>,
        referenced: Arc<InMemoryLookupTable>,
        store: Arc<InMemorySeizedItemStore>,
    ) -> Self {
        Self {
            create_handler: Arc::new(
                CreateLookupEntryHandler::new(table.clone())
                    .with_reference(referenced.clone()),
            ),
            update_handler: Arc::new(
                UpdateLookupEntryHandler::new(table.clone())
                    .with_reference(referenced),
            ),
            delete_handler: Arc::new(DeleteLookupEntryHandler::new(table.clone(), store)),
            table,
        }
    }

    /// Zone types are kept while zones still point at them.
    fn referenced_by(
        table: Arc<InMemoryLookupTable>,
        dependents: Arc<InMemoryLookupTable>,
        store: Arc<InMemorySeizedItemStore>,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateLookupEntryHandler::new(table.clone())),
            update_handler: Arc::new(UpdateLookupEntryHandler::new(table.clone())),
            delete_handler: Arc::new(
                DeleteLookupEntryHandler::new(table.clone(), store)
                    .with_dependents(dependents),
            ),
            table,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn SeizedItemQueries + Send + Sync>,
    pub register_handler:
        Arc<RegisterSeizedItemHandler<InMemorySeizedItemStore, InMemoryLookupTable>>,
    pub update_handler: Arc<UpdateSeizedItemHandler<InMemorySeizedItemStore, InMemoryLookupTable>>,
    pub delete_handler: Arc<DeleteSeizedItemHandler<InMemorySeizedItemStore>>,
    pub item_types: LookupHandlers,
    pub depositories: LookupHandlers,
    pub checkpoints: LookupHandlers,
    pub zone_types: LookupHandlers,
    pub zones: LookupHandlers,
    pub staff_types: LookupHandlers,
    pub list_limits: ListLimits,
}

impl AppState {
    pub fn in_memory(list_limits: ListLimits) -> Self {
        Self::from_parts(
            Arc::new(InMemorySeizedItemStore::new()),
            Arc::new(InMemoryLookupTable::new(LookupKind::ItemType)),
            Arc::new(InMemoryLookupTable::new(LookupKind::Depository)),
            list_limits,
        )
    }

    /// Wires the handlers over the given seized item store and the tables
    /// seized items point at. The remaining lookup tables start empty.
    pub fn from_parts(
        store: Arc<InMemorySeizedItemStore>,
        item_types: Arc<InMemoryLookupTable>,
        depositories: Arc<InMemoryLookupTable>,
        list_limits: ListLimits,
    ) -> Self {
        let zone_types = Arc::new(InMemoryLookupTable::new(LookupKind::ZoneType));
        let zones = Arc::new(InMemoryLookupTable::new(LookupKind::Zone));
        let checkpoints = Arc::new(InMemoryLookupTable::new(LookupKind::Checkpoint));
        let staff_types = Arc::new(InMemoryLookupTable::new(LookupKind::StaffType));
        Self {
            queries: store.clone(),
            register_handler: Arc::new(RegisterSeizedItemHandler::new(
                store.clone(),
                item_types.clone(),
                depositories.clone(),
            )),
            update_handler: Arc::new(UpdateSeizedItemHandler::new(
                store.clone(),
                item_types.clone(),
                depositories.clone(),
            )),
            delete_handler: Arc::new(DeleteSeizedItemHandler::new(store.clone())),
            item_types: LookupHandlers::new(item_types, store.clone()),
            depositories: LookupHandlers::new(depositories, store.clone()),
            checkpoints: LookupHandlers::new(checkpoints, store.clone()),
            zone_types: LookupHandlers::referenced_by(
                zone_types.clone(),
                zones.clone(),
                store.clone(),
            ),
            zones: LookupHandlers::referencing(zones, zone_types, store.clone()),
            staff_types: LookupHandlers::new(staff_types, store),
            list_limits,
        }
    }

    pub fn lookups(&self, kind: LookupKind) -> &LookupHandlers {
        match kind {
            LookupKind::ItemType => &self.item_types,
            LookupKind::Depository => &self.depositories,
            LookupKind::Checkpoint => &self.checkpoints,
            LookupKind::ZoneType => &self.zone_types,
            LookupKind::Zone => &self.zones,
            LookupKind::StaffType => &self.staff_types,
        }
    }
}
