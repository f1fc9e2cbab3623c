//! Messaging macros shared by the commands.
//!
//! Every macro goes through [`msg_route!`](crate::msg_route): in debug mode
//! the text is emitted as a `tracing` event so it interleaves with the
//! engine's diagnostics, otherwise it is printed plainly (errors to stderr).
//!
//! Debug mode is on when `TSHEET_DEBUG` or `RUST_LOG` is set.
//!
//! ```rust
//! use tsheet::{msg_info, msg_success};
//! use tsheet::libs::messages::Message;
//!
//! msg_info!(Message::ReadingCsvFile("march.csv".to_string()));
//! msg_success!(Message::ConfigSaved);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Cached check of the debug environment variables.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TSHEET_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Sends one formatted line either to a `tracing` macro or to a print macro.
#[doc(hidden)]
#[macro_export]
macro_rules! msg_route {
    ($event:ident, $print:ident, $($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$event!($($arg)+);
        } else {
            $print!($($arg)+);
        }
    };
}

/// Plain message; `, true` surrounds it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::msg_route!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::msg_route!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::msg_route!(info, println, "✅ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::msg_route!(info, println, "\n✅ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::msg_route!(error, eprintln, "❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::msg_route!(warn, println, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::msg_route!(info, println, "ℹ️ {}", $msg)
    };
}

/// Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// `anyhow::Error` carrying a message. `main` adds the error prefix when it
/// reports the failure.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with [`msg_error_anyhow!`](crate::msg_error_anyhow).
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
