//! Record Listing Gateway
//!
//! A small edge proxy in front of a records search API: it accepts an HTTP
//! request with query parameters controlling sort order, count, and output
//! format, forwards one search call upstream, and reformats the returned
//! record list.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                RECORD GATEWAY                 │
//!                       │                                               │
//!   Client Request      │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ────────────────────┼─▶│  http   │──▶│ request  │──▶│ upstream  │──┼──▶ Records API
//!                       │  │ server  │   │ resolve  │   │  client   │  │    (single POST)
//!                       │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                       │                                      │        │
//!                       │                                      ▼        │
//!   Client Response     │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ◀───────────────────┼──│response │◀──│  encode  │◀──│  records  │◀─┼──── JSON records
//!                       │  │+ c-type │   │csv/json/ │   │ summaries │  │
//!                       │  └─────────┘   │  binary  │   └───────────┘  │
//!                       │                └──────────┘                   │
//!                       │  ┌────────────────────────────────────────┐  │
//!                       │  │          Cross-Cutting Concerns         │  │
//!                       │  │  config │ observability │ lifecycle     │  │
//!                       │  └────────────────────────────────────────┘  │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! The encoder core is a pure function over the projected record
//! summaries; everything stateful lives at the two I/O edges.

// Core subsystems
pub mod config;
pub mod encode;
pub mod http;
pub mod records;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
