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
#![allow(clippy::module_name_repetitions)]

//! Host interaction seams: terminal prompts, shell execution, and the privilege check.
//!
//! Layout:
//! - `tty.rs`: [`Prompt`] and the controlling-terminal implementation
//! - `exec.rs`: [`CommandRunner`] and the shell-backed implementation
//! - `privilege.rs`: effective-uid helpers
//! - `error.rs`: [`HostError`]

pub mod error;
pub mod exec;
pub mod privilege;
pub mod tty;

pub use error::{HostError, HostResult};
pub use exec::{CommandRunner, ShellRunner};
pub use privilege::{effective_uid, require_superuser};
pub use tty::{Prompt, TtyPrompt};
