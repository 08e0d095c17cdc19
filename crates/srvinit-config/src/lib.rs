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

//! Runtime settings for the server bootstrap tool.
//!
//! Layout: `model.rs` (typed settings and the optional JSON document), `loader.rs`
//! (defaults, file and environment layering), `validate.rs` (field checks).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    BACKUP_SUFFIX_ENV, CONFIG_PATH_ENV, GAI_CONF_ENV, JOURNAL_RETENTION_ENV, SHELL_ENV,
    SSHD_CONFIG_ENV, TTY_DEVICE_ENV, load_from_env, load_with,
};
pub use model::{Settings, SettingsDocument};
