//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (`http_request` span with status and latency)
//! 3. Request ID (recorded in the span and echoed back)
//! 4. CORS (only when an allowed origin is configured)
//! 5. Rate limiting (governor), on account and order routes only

pub mod rate_limit;
pub mod request_id;

pub use rate_limit::{auth_rate_limiter, order_rate_limiter};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
