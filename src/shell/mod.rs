// Composition root of the seized item registry.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP and GraphQL surfaces.

pub mod actor;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
