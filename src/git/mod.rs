//! libgit2 integration.
//!
//! Installs the interactive credential prompt as the credential callback of
//! clone, fetch, push and ls-remote operations.

mod credentials;
mod remote;

pub use credentials::{
    credential_callback, fetch_options, push_options, remote_callbacks, Prompter,
};
pub use remote::{ls_remote, GitManager, RemoteRef};
