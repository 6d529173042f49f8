//! Session cookie key resolution.
//!
//! Release builds refuse to start without a readable key file of at least
//! [`SESSION_KEY_MIN_LEN`] bytes unless ephemeral keys were explicitly
//! allowed. Debug builds fall back to a generated key with a warning.

use std::path::{Path, PathBuf};

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use zeroize::Zeroize;

/// Minimum key material accepted by [`Key::derive_from`].
pub const SESSION_KEY_MIN_LEN: usize = 32;

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing key and generate one.
    Debug,
    /// Release builds require a key file unless explicitly opted out.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jobboard::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Inputs for [`session_settings`], usually taken from `AppSettings`.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions<'a> {
    pub key_file: Option<&'a Path>,
    pub allow_ephemeral_key: bool,
    pub cookie_secure: bool,
}

/// Resolved cookie session settings.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Errors raised while resolving the session key.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// No key file was configured and ephemeral keys are not allowed.
    #[error("no session key file configured; set session_key_file or allow ephemeral keys")]
    MissingKeyFile,
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file holds too little key material.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Resolve cookie session settings.
///
/// # Examples
///
/// ```rust
/// use jobboard::inbound::http::session_config::{session_settings, BuildMode, SessionOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_path = std::env::temp_dir().join("jobboard_session_key_example");
/// std::fs::write(&key_path, vec![b'a'; 64])?;
///
/// let settings = session_settings(
///     SessionOptions {
///         key_file: Some(&key_path),
///         allow_ephemeral_key: false,
///         cookie_secure: true,
///     },
///     BuildMode::Release,
/// )?;
/// assert!(settings.cookie_secure);
///
/// std::fs::remove_file(&key_path)?;
/// # Ok(())
/// # }
/// ```
pub fn session_settings(
    options: SessionOptions<'_>,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let key = resolve_key(options.key_file, mode.is_debug() || options.allow_ephemeral_key)?;
    Ok(SessionSettings {
        key,
        cookie_secure: options.cookie_secure,
        same_site: SameSite::Lax,
    })
}

fn resolve_key(key_file: Option<&Path>, ephemeral_ok: bool) -> Result<Key, SessionConfigError> {
    match key_file.map(read_key) {
        Some(Ok(key)) => Ok(key),
        Some(Err(error)) if ephemeral_ok => {
            warn!(%error, "using temporary session key (sessions end on restart)");
            Ok(Key::generate())
        }
        Some(Err(error)) => Err(error),
        None if ephemeral_ok => {
            warn!("no session key file configured; using temporary session key");
            Ok(Key::generate())
        }
        None => Err(SessionConfigError::MissingKeyFile),
    }
}

fn read_key(path: &Path) -> Result<Key, SessionConfigError> {
    let mut bytes = std::fs::read(path).map_err(|source| SessionConfigError::KeyRead {
        path: path.to_path_buf(),
        source,
    })?;
    let length = bytes.len();
    if length < SESSION_KEY_MIN_LEN {
        bytes.zeroize();
        return Err(SessionConfigError::KeyTooShort {
            path: path.to_path_buf(),
            length,
            min_len: SESSION_KEY_MIN_LEN,
        });
    }
    let key = Key::derive_from(&bytes);
    bytes.zeroize();
    Ok(key)
}
