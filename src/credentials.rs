//! Access-token lookup injected into the search controller.

/// Source of the signed-in user's access token.
pub trait CredentialProvider {
    /// Current token, or `None` when nobody is signed in.
    fn access_token(&self) -> Option<String>;
}

impl<C: CredentialProvider + ?Sized> CredentialProvider for &C {
    fn access_token(&self) -> Option<String> {
        (**self).access_token()
    }
}

/// Token held in memory for the lifetime of the host.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticCredentials {
    /// Blank tokens count as signed out.
    fn from(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
