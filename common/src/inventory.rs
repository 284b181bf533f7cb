//! # Inventory Models
//!
//! * [`host::HostIdentifier`]: the comparison key for one server across sources.
//! * [`source::SourceSet`]: the hosts one inventory source knows about.
//! * [`server::Server`]: a managed server and the facts last collected from it.
//! * [`store::ServerStore`]: the row store contract the inventory is persisted through.

pub mod host;
pub mod server;
pub mod source;
pub mod store;
