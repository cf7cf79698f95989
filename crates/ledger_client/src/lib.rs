//! Client core for a remote-backed personal finance ledger.
//!
//! The core is a thin client: it talks only to the ledger service HTTP API
//! and keeps no state beyond the session token and one in-memory record
//! cache per kind. Presentation is left to hosts; they consume cache
//! snapshots and the pure aggregation functions in [`aggregate`].
//!
//! Consistency model: the cache reflects the service as of the last
//! successful round-trip. Mutations never touch the cache directly; every
//! successful `create`/`remove` triggers a full re-list. There are no
//! retries, no timeouts and no cancellation; a dispatched request runs to
//! completion or failure with the token it captured when it started.

pub use client::ApiClient;
pub use error::{Result, TransportError};
pub use export::{ExportFile, Exporter};
pub use money::{Money, ParseAmountError};
pub use record::{LedgerRecord, RecordDraft, RecordKind};
pub use repository::Repository;
pub use session::{GateDecision, Session};

pub mod aggregate;
mod client;
mod error;
mod export;
mod money;
mod record;
mod repository;
mod session;
