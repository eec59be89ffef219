/// Operator context threaded through mutating store operations.
///
/// Carries who is acting and whether they are signed in.  No store
/// operation currently gates on it; it exists so that authorization can
/// be added at the call sites that will eventually need it instead of
/// reaching for ambient global state.
#[derive(Debug, Clone)]
pub struct Session {
    pub operator: String,
    pub authenticated: bool,
}

impl Session {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            authenticated: true,
        }
    }

    /// An unauthenticated placeholder, for flows that run before sign-in.
    pub fn anonymous() -> Self {
        Self {
            operator: "anonymous".to_string(),
            authenticated: false,
        }
    }
}
