//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_portfolio_store;

pub use in_memory_portfolio_store::InMemoryPortfolioStore;
