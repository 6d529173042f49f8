//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `JOBBOARD_*` environment variables and an
//! optional config file, in that order of precedence.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::session_config::SessionOptions;

const DEFAULT_DATABASE_PATH: &str = "jobboard.db";
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));

/// Start-up configuration for the job board server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOBBOARD")]
pub struct AppSettings {
    /// SQLite database file; created on first start.
    pub database_path: Option<PathBuf>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// File holding the session cookie key material.
    pub session_key_file: Option<PathBuf>,
    /// Permit a generated session key when no usable key file exists.
    pub allow_ephemeral_session_key: Option<bool>,
    /// Mark session cookies `Secure`.
    pub cookie_secure: Option<bool>,
}

impl AppSettings {
    /// Return the configured database path, falling back to the default.
    pub fn database_path(&self) -> &Path {
        self.database_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATABASE_PATH))
    }

    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Whether a generated session key is acceptable; off unless set.
    pub fn allow_ephemeral_session_key(&self) -> bool {
        self.allow_ephemeral_session_key.unwrap_or(false)
    }

    /// Whether session cookies carry the `Secure` flag; on unless set.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Session key inputs for
    /// [`session_settings`](crate::inbound::http::session_config::session_settings).
    pub fn session_options(&self) -> SessionOptions<'_> {
        SessionOptions {
            key_file: self.session_key_file.as_deref(),
            allow_ephemeral_key: self.allow_ephemeral_session_key(),
            cookie_secure: self.cookie_secure(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "JOBBOARD_DATABASE_PATH",
        "JOBBOARD_BIND_ADDR",
        "JOBBOARD_SESSION_KEY_FILE",
        "JOBBOARD_ALLOW_EPHEMERAL_SESSION_KEY",
        "JOBBOARD_COOKIE_SECURE",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("jobboard")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.database_path(), Path::new(DEFAULT_DATABASE_PATH));
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(settings.session_key_file.is_none());
        assert!(!settings.allow_ephemeral_session_key());
        assert!(settings.cookie_secure());

        let options = settings.session_options();
        assert!(options.key_file.is_none());
        assert!(!options.allow_ephemeral_key);
        assert!(options.cookie_secure);
    }

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    fn session_flags_follow_the_environment(#[case] raw: &str, #[case] expected: bool) {
        let _guard = lock_env([
            ("JOBBOARD_DATABASE_PATH", None),
            ("JOBBOARD_BIND_ADDR", None),
            ("JOBBOARD_SESSION_KEY_FILE", None),
            ("JOBBOARD_ALLOW_EPHEMERAL_SESSION_KEY", Some(raw.to_owned())),
            ("JOBBOARD_COOKIE_SECURE", Some(raw.to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.allow_ephemeral_session_key(), expected);
        assert_eq!(settings.cookie_secure(), expected);
        let options = settings.session_options();
        assert_eq!(options.allow_ephemeral_key, expected);
        assert_eq!(options.cookie_secure, expected);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("JOBBOARD_DATABASE_PATH", Some("/tmp/board.db".to_owned())),
            ("JOBBOARD_BIND_ADDR", Some("0.0.0.0:9000".to_owned())),
            ("JOBBOARD_SESSION_KEY_FILE", Some("/run/secrets/key".to_owned())),
            ("JOBBOARD_ALLOW_EPHEMERAL_SESSION_KEY", Some("true".to_owned())),
            ("JOBBOARD_COOKIE_SECURE", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.database_path(), Path::new("/tmp/board.db"));
        assert_eq!(settings.bind_addr().port(), 9000);

        let options = settings.session_options();
        assert_eq!(options.key_file, Some(Path::new("/run/secrets/key")));
        assert!(options.allow_ephemeral_key);
        assert!(!options.cookie_secure);
    }
}
