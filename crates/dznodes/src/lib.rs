//! The dzNodes word-cloud node pack.
//!
//! [`NodePack`] is the entry point the host calls when it loads the pack.
//! Loading runs a fixed sequence: configuration from defaults, file and
//! `DZNODES_*` environment, structured telemetry, web asset
//! synchronisation, font directory resolution and discovery, then node
//! registration. Every stage reports through a [`LoadReporter`] so the
//! load can be followed in the logs.
//!
//! The pack registers three nodes:
//!
//! - `ComfyWordCloud` renders text as a word-cloud image;
//! - `LoadTextFile` reads a UTF-8 text file;
//! - `RGB_Picker` outputs a picked colour as hex or decimal.
//!
//! Asset synchronisation is best effort. Its failures are reported and the
//! pack still loads.

pub mod assets;
mod bootstrap;
pub mod nodes;
mod reporter;
pub mod telemetry;

pub use assets::{AssetSync, AssetSyncError, AssetSyncReport, OBSOLETE_ASSETS};
pub use bootstrap::{
    BootstrapError, ConfigLoader, NodePack, PackServices, StaticConfigLoader, SystemConfigLoader,
};
pub use reporter::{LoadReporter, StructuredLoadReporter};
pub use telemetry::{SubscriberOwner, TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
