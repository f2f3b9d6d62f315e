//! # git-cred-prompt
//!
//! Interactive credential acquisition for libgit2 remote operations.
//!
//! ## Overview
//!
//! When a fetch, push or clone needs authentication, libgit2 calls a
//! credential callback with the set of credential types the remote accepts.
//! This crate answers that callback by asking the operator for the minimum
//! set of secrets on the terminal and building the matching `git2::Cred`.
//!
//! Requested types are considered in a fixed order:
//!
//! 1. SSH key: prompts for the private key path and an optional passphrase;
//!    the public key is the same path with `.pub` appended
//! 2. Plaintext username/password: prompts for the password
//! 3. Username only: no further prompt
//!
//! The username comes from the remote URL when present, otherwise it is
//! prompted for first.
//!
//! ```no_run
//! let mut callbacks = git2::RemoteCallbacks::new();
//! callbacks.credentials(git_cred_prompt::git::credential_callback);
//! ```

/// Credential request, kinds and the produced credential.
///
/// Defines the fixed SSH key, plaintext, username priority used to pick one
/// credential kind from the transport's allowed-types bitmask, and the
/// `.pub` public key path convention.
pub mod credential;

/// Typed failures of a credential negotiation and their libgit2 status codes.
pub mod error;

/// libgit2 integration.
///
/// The credential callback adapter plus clone, fetch, push and ls-remote
/// helpers that install it.
pub mod git;

/// Logging configuration.
///
/// Console logging to stderr, driven by the `-v` count and `RUST_LOG`.
pub mod logger;

/// Chooses the credential kind and drives the prompts for one challenge.
pub mod negotiator;

/// Prompt I/O capability, line reading, and terminal/scripted implementations.
pub mod prompt;

pub use credential::{Credential, CredentialKind, CredentialRequest};
pub use error::CredentialError;
pub use negotiator::Negotiator;
