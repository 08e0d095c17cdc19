#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! Interactive menu for bootstrapping a Linux server.
//!
//! Layout:
//! - `cli.rs`: process entry, the menu loop state machine
//! - `registry.rs`: keyed action table and the dispatch boundary
//! - `actions/`: one module per administrative concern
//! - `error.rs`: errors raised by actions
//! - `output.rs`: menu and outcome rendering
//! - `main.rs`: thin entrypoint delegating to `run()`

pub mod actions;
pub mod cli;
pub mod error;
pub(crate) mod output;
pub mod registry;

pub use actions::{ActionContext, ActionReport};
pub use cli::{EXIT_KEY, LoopExit, LoopState, MenuLoop, run};
pub use error::{ActionError, ActionResult};
pub use registry::{Action, ActionEntry, DispatchOutcome, ManagedService, Registry};
