//! Async API client core for the hero service.
//!
//! # Overview
//! `HeroClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `HeroService` runs
//! those requests through a `Transport` and reports each outcome to a
//! `Logger`, replacing failures with fallback values.
//!
//! # Design
//! - `HeroClient` is stateless; it holds only the collection URL.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `HeroService` takes its client, transport and logger as constructor
//!   arguments; there is no global instance.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{HeroClient, DEFAULT_COLLECTION_PATH};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{Logger, MessageLog};
pub use service::{HeroService, SERVICE_NAME};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Hero, HeroRef, NewHero};
