//! HTTP middleware for the storefront.

pub mod client_ip;
pub mod rate_limit;
pub mod request_id;

pub use client_ip::{ClientIp, client_ip_from_headers};
pub use request_id::request_id_middleware;
