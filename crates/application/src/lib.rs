//! Application services and ports for the Rentfolio scoping core.

#![forbid(unsafe_code)]

mod bootstrap;
mod locations;
mod ports;
mod scope;

pub use bootstrap::{BootstrapOrchestrator, ScopedSnapshot};
pub use locations::LocationService;
pub use ports::PortfolioStore;
pub use scope::PropertyScopeResolver;
