//! Look up Active Directory users by given name and surname.
//!
//! Names come either from the command line or from a spreadsheet with
//! "First Name" and "Last Name" columns. Each pair is searched for under a
//! search base over a single bound connection, and the matching users are
//! printed.

pub mod app;
pub mod batch;
pub mod client;
pub mod entry;
pub mod error;
pub mod present;
pub mod source;

pub use tracing::{debug, error, info, trace, warn};

pub use crate::{
    app::run_lookup,
    batch::{run_batch, BatchSummary},
    client::{BindMethod, Connector, Directory, DirectoryClient, Session},
    entry::{DirectoryEntry, NamePair},
    error::SleuthError,
    present::{OutputFormat, Presenter},
    source::InputSource,
};

use tracing_subscriber::EnvFilter;

pub fn start_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(format!("usersleuth={},ldap3={}", level, level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
