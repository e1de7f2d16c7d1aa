//! Printing macros that switch between console output and tracing.
//!
//! When `STANDUP_DEBUG` or `RUST_LOG` is set, messages are emitted through
//! `tracing` (the subscriber is installed in `main`). Otherwise they go
//! straight to stdout, or to stderr for errors.
//!
//! ```text
//! msg_print!(msg)   -> println!   | tracing::info!
//! msg_success!(msg) -> println!   | tracing::info!   (✅ prefix)
//! msg_warning!(msg) -> println!   | tracing::warn!   (⚠️ prefix)
//! msg_error!(msg)   -> eprintln!  | tracing::error!  (❌ prefix)
//! msg_debug!(msg)   -> (nothing)  | tracing::debug!  (🔍 prefix)
//! ```
//!
//! Report content itself is not printed through these macros: the report is
//! written to an explicit writer so it stays on stdout in every mode.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable enabling debug output.
pub const DEBUG_ENV: &str = "STANDUP_DEBUG";

/// Returns whether debug mode is on. Evaluated once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message.
///
/// ```rust,ignore
/// msg_print!(Message::ConfigModuleRtm);
/// msg_print!(Message::ConfigModuleRtm, true); // surrounded by blank lines
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
///
/// ```rust,ignore
/// msg_error!(Message::RtmNotConfigured);
/// msg_error!(error); // anything implementing Display
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Debug-only message; suppressed entirely outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
///
/// ```rust,ignore
/// fn client(config: &Config) -> anyhow::Result<Rtm> {
///     let Some(rtm) = &config.rtm else {
///         msg_bail_anyhow!(Message::RtmNotConfigured);
///     };
///     Ok(Rtm::new(rtm))
/// }
/// ```
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
