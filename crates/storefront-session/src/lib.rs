//! # storefront-session: Application Session for the Storefront
//!
//! The layer the UI talks to. It owns the catalog, loads the store config,
//! keeps the current cart value and answers commands with UI-ready data.
//!
//! ## Session Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Startup Sequence                                 │
//! │                                                                         │
//! │  1. init_tracing()                 RUST_LOG or "info,storefront=debug"  │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  2. StoreConfig::load_or_default   storefront.toml → PricingPolicy      │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  3. Catalog::sample() / from_json  product list, unique ids             │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  4. StorefrontSession::from_config empty cart, ready for commands       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_session::{Catalog, StoreConfig, StorefrontSession};
//!
//! let session = StorefrontSession::from_config(Catalog::sample(), &StoreConfig::default());
//! let cart = session.add_to_cart("1", Some(2), Some("M"), None).unwrap();
//! assert_eq!(cart.totals.total.cents(), 6398);
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use config::{PricingSettings, StoreConfig, StoreSettings};
pub use error::{SessionError, SessionResult};
pub use session::{CartResponse, CartState, SearchResponse, StorefrontSession};
pub use storefront_core::Catalog;

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug messages
/// - `RUST_LOG=storefront_session=trace` - Trace level for the session
/// - Default: `info,storefront=debug`
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
