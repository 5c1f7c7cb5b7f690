//! Log subscriber installation inside the host process.
//!
//! The host may already route `tracing` events somewhere. [`initialise`]
//! installs the pack's subscriber only when the global slot is free, and the
//! returned [`TelemetryHandle`] records which side owns it.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt};

use dznodes_config::{LogFormat, PackConfig};

static OWNER: OnceCell<SubscriberOwner> = OnceCell::new();

/// Owner of the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberOwner {
    /// The pack installed a subscriber built from [`PackConfig`].
    Pack,
    /// The host installed one first; pack events flow into it.
    Host,
}

/// Result of [`initialise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryHandle {
    owner: SubscriberOwner,
}

impl TelemetryHandle {
    /// Which side owns the global subscriber.
    #[must_use]
    pub const fn owner(&self) -> SubscriberOwner {
        self.owner
    }

    /// Returns `true` when the pack's log format and filter are in effect.
    #[must_use]
    pub const fn is_pack_owned(&self) -> bool {
        matches!(self.owner, SubscriberOwner::Pack)
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression is malformed.
    #[error("invalid log filter `{filter}`: {source}")]
    Filter {
        /// Expression that failed to parse.
        filter: String,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
}

/// Installs the pack's subscriber unless the host already owns one.
///
/// The outcome of the first successful call is cached; later calls return
/// the same owner without touching global state.
///
/// # Examples
///
/// ```rust
/// use dznodes::telemetry;
/// use dznodes_config::PackConfig;
///
/// # fn main() -> Result<(), dznodes::telemetry::TelemetryError> {
/// let config = PackConfig::default();
/// let first = telemetry::initialise(&config)?;
/// let second = telemetry::initialise(&config)?;
/// assert_eq!(first, second);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for a malformed filter expression.
pub fn initialise(config: &PackConfig) -> Result<TelemetryHandle, TelemetryError> {
    OWNER
        .get_or_try_init(|| install(config))
        .map(|owner| TelemetryHandle { owner: *owner })
}

fn install(config: &PackConfig) -> Result<SubscriberOwner, TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter()).map_err(|source| TelemetryError::Filter {
        filter: config.log_filter().to_owned(),
        source,
    })?;
    let owner = tracing::subscriber::set_global_default(build_subscriber(config, filter))
        .map_or(SubscriberOwner::Host, |()| SubscriberOwner::Pack);
    tracing::debug!(
        target: "dznodes::telemetry",
        owner = ?owner,
        format = %config.log_format(),
        "log subscriber resolved"
    );
    Ok(owner)
}

fn build_subscriber(config: &PackConfig, filter: EnvFilter) -> Box<dyn Subscriber + Send + Sync> {
    let format = config.log_format();
    let ansi = config
        .log_color()
        .enabled(format, io::stderr().is_terminal());
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
        LogFormat::Pretty => Box::new(
            builder
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .finish(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("dznodes=verbose")]
    #[case("dznodes=loud")]
    fn malformed_filters_are_rejected(#[case] filter: &str) {
        let config = PackConfig {
            log_filter: filter.to_owned(),
            ..PackConfig::default()
        };
        let error = install(&config).expect_err("filter should be rejected");
        assert!(matches!(error, TelemetryError::Filter { filter: ref f, .. } if f == filter));
    }

    #[rstest]
    fn repeated_initialisation_keeps_the_first_owner() {
        let config = PackConfig::default();
        let first = initialise(&config).expect("first initialisation");
        let second = initialise(&config).expect("second initialisation");
        assert_eq!(first.owner(), second.owner());
        assert_eq!(
            first.is_pack_owned(),
            first.owner() == SubscriberOwner::Pack
        );
    }
}
