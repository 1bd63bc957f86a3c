//! # Commerce Store
//!
//! The in-memory core of a small commerce backend: a product catalog, one
//! shopping cart per user and an order ledger, plus the service layer that
//! validates requests in front of them.
//!
//! ## Architecture
//!
//! Each collection is owned by a [`ResourceActor`](framework::ResourceActor):
//! a Tokio task that holds the map and serves requests from its mailbox one
//! at a time. Nothing outside the task ever touches the map, so there are no
//! locks; callers receive clones.
//!
//! - **Catalog** ([`product_actor`]) - products by id, category listing, text search, stock
//! - **Carts** ([`cart_actor`]) - one cart per user, created on first use
//! - **Orders** ([`order_actor`]) - `ORDER-<n>` ids, per-user history, status
//!
//! Checkout is a cart action. It runs inside the cart actor and records the
//! order through an [`OrderClient`](clients::OrderClient) injected as the
//! actor's context, so an add racing with a checkout is either part of the
//! order or left in the fresh cart, never lost.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the request set, pagination and mocks.
//!
//! ### 2. The Data ([`model`])
//! [`Product`](model::Product), [`Cart`](model::Cart), [`Order`](model::Order) and their ids.
//!
//! ### 3. The Interface ([`clients`], [`service`])
//! Domain clients wrap the generic `ResourceClient`; services validate input
//! and map failures onto [`ServiceError`](service::ServiceError) categories.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) starts and wires the actors,
//! [`ShopConfig`](lifecycle::ShopConfig) configures them.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod service;
