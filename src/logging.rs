// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for binaries and hosts.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "storyline=debug,info"
    } else {
        "storyline=info,warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `debug`.
///
/// Does nothing if a global subscriber is already set, so tests and
/// embedding hosts can call it freely.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
