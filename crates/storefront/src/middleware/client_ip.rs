//! Client IP extraction behind reverse proxies.
//!
//! The storefront always runs behind at least one proxy (CDN or load
//! balancer), so the socket peer address is rarely the customer. Proxy
//! headers are checked in trust order; the socket address is the last
//! resort.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};

/// Proxy headers consulted for the real client address, most trusted first.
const IP_HEADERS: [&str; 4] = [
    "cf-connecting-ip",
    "x-forwarded-for",
    "x-real-ip",
    "fly-client-ip",
];

/// Extract the client IP from proxy headers.
///
/// `x-forwarded-for` may carry a comma-separated chain; the first entry is
/// the originating client. Unparseable values are skipped rather than
/// treated as errors.
#[must_use]
pub fn client_ip_from_headers(headers: &HeaderMap) -> Option<IpAddr> {
    IP_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|value| value.trim().parse::<IpAddr>().ok())
    })
}

/// Extractor yielding the best-effort client IP.
///
/// Checks proxy headers first, then the socket peer address when the
/// router was built with connect info. `None` only when neither exists.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ip) = client_ip_from_headers(&parts.headers) {
            return Ok(Self(Some(ip)));
        }

        let socket_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(Self(socket_ip))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_no_headers() {
        assert_eq!(client_ip_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cf_connecting_ip_wins() {
        let map = headers(&[
            ("cf-connecting-ip", "203.0.113.7"),
            ("x-forwarded-for", "198.51.100.1"),
        ]);
        assert_eq!(
            client_ip_from_headers(&map),
            Some("203.0.113.7".parse().unwrap())
        );
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let map = headers(&[("x-forwarded-for", "198.51.100.1, 10.0.0.1, 172.16.0.1")]);
        assert_eq!(
            client_ip_from_headers(&map),
            Some("198.51.100.1".parse().unwrap())
        );
    }

    #[test]
    fn test_real_ip_fallback() {
        let map = headers(&[("x-real-ip", " 198.51.100.9 ")]);
        assert_eq!(
            client_ip_from_headers(&map),
            Some("198.51.100.9".parse().unwrap())
        );
    }

    #[test]
    fn test_fly_client_ip_last() {
        let map = headers(&[("fly-client-ip", "2001:db8::1")]);
        assert_eq!(
            client_ip_from_headers(&map),
            Some("2001:db8::1".parse().unwrap())
        );
    }

    #[test]
    fn test_garbage_header_skipped() {
        let map = headers(&[
            ("cf-connecting-ip", "not-an-ip"),
            ("x-real-ip", "198.51.100.9"),
        ]);
        assert_eq!(
            client_ip_from_headers(&map),
            Some("198.51.100.9".parse().unwrap())
        );
    }
}
