use crate::{
    api::{ApiClient, ApiConfig, ConsoleNotifier, Notifier, TracingNotifier},
    session::{CookieJar, Navigator, RouteDecision, SessionContext, route_decision},
};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{
    env,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};
use tracing::debug;

pub const COOKIE_DIR: &str = ".stockroom";
pub const COOKIE_FILE: &str = "cookies";

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub cookie_jar: PathBuf,
    pub timeout: Duration,
    pub compact: bool,
    pub quiet: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, cookie_jar: PathBuf) -> Self {
        Self {
            api_url,
            cookie_jar,
            timeout: crate::api::config::DEFAULT_TIMEOUT,
            compact: false,
            quiet: false,
        }
    }

    /// Build the one client and session shared by every action.
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn connect(&self) -> Result<Runtime> {
        let config = ApiConfig::new(&self.api_url)
            .context("invalid STOCKROOM_API_URL")?
            .with_timeout(self.timeout);
        debug!("API base URL: {}", config.base_url);

        let store = Arc::new(CookieJar::new(self.cookie_jar.clone()));
        let session = SessionContext::new(store.clone(), Arc::new(LoginHint));
        let api = ApiClient::new(config, store, self.notifier())?;

        Ok(Runtime {
            api,
            session,
            compact: self.compact,
        })
    }

    /// Failed requests go to the log under `--quiet`, to stderr otherwise.
    fn notifier(&self) -> Arc<dyn Notifier> {
        if self.quiet {
            Arc::new(TracingNotifier)
        } else {
            Arc::new(ConsoleNotifier)
        }
    }
}

/// `$HOME/.stockroom/cookies`, or a relative path when `HOME` is unset.
#[must_use]
pub fn default_cookie_jar() -> PathBuf {
    env::var_os("HOME")
        .map_or_else(PathBuf::new, PathBuf::from)
        .join(COOKIE_DIR)
        .join(COOKIE_FILE)
}

/// Terminal stand-in for the router: tells the user where to go next.
struct LoginHint;

impl Navigator for LoginHint {
    fn navigate(&self, route: &str) {
        if route.contains("expired=1") {
            eprintln!("Your session is no longer valid. Run `stockroom login` to sign in again.");
        } else {
            eprintln!("Signed out. Run `stockroom login` to sign in.");
        }
        debug!("navigate: {route}");
    }
}

pub struct Runtime {
    pub api: ApiClient,
    pub session: SessionContext,
    pub compact: bool,
}

impl Runtime {
    /// Gate a protected dashboard route: token presence first, then the guard.
    /// # Errors
    /// Returns an error when there is no valid session.
    pub fn require_session(&self, route: &str) -> Result<()> {
        if let RouteDecision::Redirect(target) = route_decision(route, self.session.store().as_ref())
        {
            debug!("{route} redirected to {target}");
            bail!("not signed in; run `stockroom login` first");
        }

        let status = self.session.refresh();
        if !status.is_valid() {
            bail!("session is not valid ({status:?})");
        }
        Ok(())
    }

    /// Print a value as JSON on stdout.
    /// # Errors
    /// Returns an error if the value cannot be serialized.
    pub fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        println!("{rendered}");
        Ok(())
    }
}
