//! Backup-then-mutate edits for system configuration files.
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

//! Every mutation first copies its target to `<target><suffix>`. Edits are not
//! transactional: the backup is the only recovery path and is never removed here.

pub mod backup;
pub mod edit;
pub mod error;

pub use backup::{backup_file, backup_if_exists, backup_path};
pub use edit::{PortChange, append_block, rewrite_port_directive, set_ssh_port};
pub use error::{FsOpsError, FsOpsResult};
