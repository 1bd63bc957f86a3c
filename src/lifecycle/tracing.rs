//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber whose
//! level comes from `RUST_LOG`. The compact format hides module paths
//! (`with_target(false)`); actors tag every event with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the final store size
//! - **Requests**: every Create, Get, Update, Action and Query at debug, with its payload
//! - **Outcomes**: `Created`, `Updated`, `Action ok` at info; rejections at warn
//! - **Client calls**: one span per domain client method (`#[instrument]`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=commerce_store::framework=debug cargo run
//! ```
//!
//! A checkout at `info` looks like:
//!
//! ```text
//! INFO Created entity_type="Order" id=ORDER-1 replaced=false size=1
//! INFO create_order: Order recorded order_id=ORDER-1 user_id=alice
//! INFO Checked out user_id=alice order_id=ORDER-1 total=300000
//! INFO Action ok entity_type="Cart" id=alice
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
