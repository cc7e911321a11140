//! Shared session state.
//!
//! Holds the bearer token and response language used by every request.
//! The state is read when a request is dispatched, not when a module method
//! is called, so a change made while requests are in flight applies to
//! whichever requests have not been sent yet.

use std::sync::Arc;

use mizban_domain::Language;
use parking_lot::RwLock;

use crate::ports::OutgoingRequest;

const AUTHORIZATION: &str = "Authorization";
const ACCEPT_LANGUAGE: &str = "Accept-Language";

#[derive(Clone, Default)]
struct SessionState {
    token: Option<String>,
    language: Language,
}

/// Thread-safe token and language store shared by all modules.
#[derive(Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    /// Creates a session with no token and the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                token: None,
                language,
            })),
        }
    }

    /// Sets or clears the bearer token.
    pub fn set_token(&self, token: Option<String>) {
        self.state.write().token = token;
    }

    /// Returns the current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Clears the bearer token.
    pub fn clear_token(&self) {
        self.set_token(None);
    }

    /// Returns true when a token is set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Sets the response language.
    pub fn set_language(&self, language: Language) {
        self.state.write().language = language;
    }

    /// Returns the response language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.state.read().language
    }

    /// Writes the session headers onto a request.
    ///
    /// `Authorization` is set only when a token exists. `Accept-Language`
    /// is always overwritten.
    pub fn apply(&self, request: &mut OutgoingRequest) {
        let state = self.state.read();
        if let Some(token) = &state.token {
            request.set_header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request.set_header(ACCEPT_LANGUAGE, state.language.as_str());
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("language", &state.language)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizban_domain::HttpMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_lifecycle() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.set_token(Some("T1".to_string()));
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("T1"));

        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::new(Language::En);
        let other = session.clone();

        other.set_language(Language::Fa);
        other.set_token(Some("shared".to_string()));

        assert_eq!(session.language(), Language::Fa);
        assert_eq!(session.token().as_deref(), Some("shared"));
    }

    #[test]
    fn test_apply_sets_headers() {
        let session = Session::new(Language::Fa);
        session.set_token(Some("abc".to_string()));

        let mut request = OutgoingRequest::new(HttpMethod::Get, "/x");
        request.set_header("accept-language", "en");
        session.apply(&mut request);

        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
        assert_eq!(request.header("Accept-Language"), Some("fa"));
        assert_eq!(request.headers.len(), 2);
    }

    #[test]
    fn test_apply_without_token_leaves_authorization_alone() {
        let session = Session::default();
        let mut request = OutgoingRequest::new(HttpMethod::Get, "/x");
        session.apply(&mut request);
        assert_eq!(request.header("Authorization"), None);

        request.set_header("authorization", "Basic custom");
        session.apply(&mut request);
        assert_eq!(request.header("Authorization"), Some("Basic custom"));
        assert_eq!(request.header("Accept-Language"), Some("en"));
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::default();
        session.set_token(Some("secret-token".to_string()));
        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("authenticated: true"));
    }
}
