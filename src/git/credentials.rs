use git2::{Cred, CredentialType, FetchOptions, PushOptions, RemoteCallbacks};

use crate::credential::CredentialRequest;
use crate::negotiator::Negotiator;
use crate::prompt::{PromptIo, Terminal};

/// Credential callback for git operations
///
/// Matches the signature expected by [`RemoteCallbacks::credentials`] and
/// prompts the operator on the terminal. The remote URL is informational.
pub fn credential_callback(
    url: &str,
    username_from_url: Option<&str>,
    allowed_types: CredentialType,
) -> Result<Cred, git2::Error> {
    Prompter::new(Terminal::new()).prompt(url, username_from_url, allowed_types)
}

/// Adapts a [`Negotiator`] to the libgit2 callback contract.
pub struct Prompter<P> {
    negotiator: Negotiator<P>,
}

impl<P: PromptIo> Prompter<P> {
    pub fn new(io: P) -> Self {
        Prompter {
            negotiator: Negotiator::new(io),
        }
    }

    pub fn prompt(
        &mut self,
        url: &str,
        username_from_url: Option<&str>,
        allowed_types: CredentialType,
    ) -> Result<Cred, git2::Error> {
        let request = CredentialRequest::new(url, username_from_url, allowed_types);

        // CredentialError converts into a git2::Error carrying the status code
        let credential = self.negotiator.negotiate(&request)?;
        credential.to_cred()
    }

    pub fn into_inner(self) -> P {
        self.negotiator.into_inner()
    }
}

/// Callbacks with the interactive credential prompt installed.
pub fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    // Called once per authentication challenge
    callbacks.credentials(credential_callback);
    callbacks
}

pub fn fetch_options<'a>() -> FetchOptions<'a> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(remote_callbacks());
    fetch_options
}

pub fn push_options<'a>() -> PushOptions<'a> {
    let mut push_options = PushOptions::new();
    push_options.remote_callbacks(remote_callbacks());
    push_options
}
