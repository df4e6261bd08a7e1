use super::AuthContext;

/// Route guard over a single capability: authenticated or not.
///
/// Guards hold no state. What happens to a refused visitor (redirect,
/// nothing) is the router's business; [`Gate::redirect_to`] names the usual
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Children render only for authenticated users (admin views).
    Private,
    /// Children render only for anonymous users (the login view).
    Anon,
}

impl Gate {
    pub fn admits(self, auth: &AuthContext) -> bool {
        match self {
            Gate::Private => auth.is_logged_in(),
            Gate::Anon => !auth.is_logged_in(),
        }
    }

    /// Build the child when admitted, nothing otherwise.
    pub fn render<T>(self, auth: &AuthContext, child: impl FnOnce() -> T) -> Option<T> {
        if self.admits(auth) {
            Some(child())
        } else {
            None
        }
    }

    pub fn redirect_to(self) -> &'static str {
        match self {
            Gate::Private => "/login",
            Gate::Anon => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::types::User;
    use std::sync::Arc;

    fn anonymous() -> AuthContext {
        AuthContext::new(Arc::new(MemoryTokenStore::default()))
    }

    fn admin() -> AuthContext {
        AuthContext::logged_in(
            Arc::new(MemoryTokenStore::with_token("t")),
            User {
                id: None,
                name: "Vera".to_string(),
                email: "vera@example.com".to_string(),
            },
        )
    }

    #[test]
    fn test_gate_truth_table() {
        assert!(Gate::Private.admits(&admin()));
        assert!(!Gate::Private.admits(&anonymous()));
        assert!(Gate::Anon.admits(&anonymous()));
        assert!(!Gate::Anon.admits(&admin()));
    }

    #[test]
    fn test_render_builds_child_only_when_admitted() {
        let mut built = 0;
        assert_eq!(Gate::Private.render(&anonymous(), || { built += 1; "admin" }), None);
        assert_eq!(built, 0);
        assert_eq!(Gate::Private.render(&admin(), || { built += 1; "admin" }), Some("admin"));
        assert_eq!(built, 1);
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(Gate::Private.redirect_to(), "/login");
        assert_eq!(Gate::Anon.redirect_to(), "/");
    }
}
