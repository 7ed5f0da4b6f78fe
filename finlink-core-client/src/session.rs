//! Client session gate: one boolean flag deciding which route tree is
//! reachable. No token refresh, no expiry, no multi-tab sync.

/// Pages of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Transactions,
    Wallet,
    Kyc,
    Loans,
    Support,
    Settings,
    Notifications,
    Admin,
}

impl Route {
    /// Every route except the login entry point sits behind the gate
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Transactions => "/transactions",
            Route::Wallet => "/wallet",
            Route::Kyc => "/kyc",
            Route::Loans => "/loan",
            Route::Support => "/support",
            Route::Settings => "/settings",
            Route::Notifications => "/notifications",
            Route::Admin => "/admin",
        }
    }
}

/// Authentication flag held for the lifetime of the client process
#[derive(Debug, Default)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    /// Starts unauthenticated
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Flips the flag after a successful `login` call
    pub fn on_login(&mut self) {
        self.authenticated = true;
    }

    pub fn on_logout(&mut self) {
        self.authenticated = false;
    }

    /// Redirect rules: protected routes bounce unauthenticated access
    /// to Login; the login page bounces authenticated access to the
    /// default landing page.
    pub fn resolve(&self, requested: Route) -> Route {
        if !self.authenticated && requested.requires_auth() {
            Route::Login
        } else if self.authenticated && requested == Route::Login {
            Route::Dashboard
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_access_redirects_to_login() {
        let gate = SessionGate::new();
        assert_eq!(gate.resolve(Route::Dashboard), Route::Login);
        assert_eq!(gate.resolve(Route::Admin), Route::Login);
        assert_eq!(gate.resolve(Route::Login), Route::Login);
    }

    #[test]
    fn authenticated_login_redirects_to_dashboard() {
        let mut gate = SessionGate::new();
        gate.on_login();
        assert_eq!(gate.resolve(Route::Login), Route::Dashboard);
        assert_eq!(gate.resolve(Route::Wallet), Route::Wallet);
    }

    #[test]
    fn logout_closes_the_gate_again() {
        let mut gate = SessionGate::new();
        gate.on_login();
        gate.on_logout();
        assert!(!gate.is_authenticated());
        assert_eq!(gate.resolve(Route::Settings), Route::Login);
    }
}
