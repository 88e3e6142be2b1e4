pub mod commands {
    pub mod register_seized_item;
}
pub mod context;
pub mod rows;
pub mod state;
