//! Project records, the record store and its subscription registry.
//!
//! The store is the single source of truth for project records. Every
//! accepted mutation is fanned out to registered listeners as an immutable
//! [`domain::ProjectSnapshot`]. The module follows the same layering as the
//! rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store, registry and intake gate in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
