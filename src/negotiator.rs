use crate::credential::{
    derive_public_key_path, redact_url, Credential, CredentialKind, CredentialRequest,
};
use crate::error::CredentialError;
use crate::prompt::{ask, PromptIo, PASSWORD_PROMPT, SSH_KEY_PROMPT, USERNAME_PROMPT};

/// Collects exactly one credential per authentication challenge.
///
/// The kind is chosen from the request's allowed types in the fixed order
/// SSH key, plaintext username/password, username only. Prompts go through
/// the injected [`PromptIo`].
pub struct Negotiator<P> {
    io: P,
}

impl<P: PromptIo> Negotiator<P> {
    pub fn new(io: P) -> Self {
        Negotiator { io }
    }

    pub fn into_inner(self) -> P {
        self.io
    }

    /// Run one negotiation.
    ///
    /// Hard failures are reported to the operator through
    /// [`PromptIo::write_diagnostic`] before being returned. An unsupported
    /// request fails silently without prompting.
    pub fn negotiate(
        &mut self,
        request: &CredentialRequest<'_>,
    ) -> Result<Credential, CredentialError> {
        let result = self.collect(request);

        if let Err(err) = &result {
            if err.is_hard() {
                log::debug!(
                    "Credential negotiation for {} failed: {err}",
                    redact_url(request.url)
                );
                self.io.write_diagnostic(&err.to_string());
            }
        }

        result
    }

    fn collect(&mut self, request: &CredentialRequest<'_>) -> Result<Credential, CredentialError> {
        let kind = match CredentialKind::select(request.allowed_types) {
            Some(kind) => kind,
            None => {
                log::debug!(
                    "No supported credential type in {:?} for {}",
                    request.allowed_types,
                    redact_url(request.url)
                );
                return Err(CredentialError::UnsupportedCredentialType);
            }
        };

        log::info!(
            "Requesting {kind} credentials for {}",
            redact_url(request.url)
        );

        let username = self.resolve_username(request.username_hint)?;

        match kind {
            CredentialKind::SshKey => {
                let private_key_path = ask(&mut self.io, SSH_KEY_PROMPT, false)?;
                let passphrase = ask(&mut self.io, PASSWORD_PROMPT, true)?;
                let public_key_path = derive_public_key_path(&private_key_path)?;

                Ok(Credential::SshKey {
                    username,
                    public_key_path,
                    private_key_path,
                    passphrase: (!passphrase.is_empty()).then_some(passphrase),
                })
            }
            CredentialKind::UserPassPlaintext => {
                let password = ask(&mut self.io, PASSWORD_PROMPT, true)?;
                Ok(Credential::UsernamePassword { username, password })
            }
            CredentialKind::Username => Ok(Credential::UsernameOnly { username }),
        }
    }

    fn resolve_username(&mut self, hint: Option<&str>) -> Result<String, CredentialError> {
        match hint {
            Some(username) => {
                log::trace!("Using username {username:?} from URL");
                Ok(username.to_string())
            }
            None => ask(&mut self.io, USERNAME_PROMPT, false),
        }
    }
}
