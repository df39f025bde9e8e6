//
//  pulumi-org
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Host Utilities
//!
//! The API host can come from the `--host` flag, the `PULUMI_API_HOST`
//! environment variable or the configuration file. Users paste it in many
//! shapes (`https://api.pulumi.com/`, `API.PULUMI.COM`,
//! `https://api.pulumi.com/api/`), so it is normalized to a bare lowercase
//! `host[:port]` before the base URL is built.
//!
//! ```rust
//! use pulumi_org::config::normalize_host;
//!
//! assert_eq!(normalize_host("https://API.pulumi.com/"), "api.pulumi.com");
//! ```

/// Strips the scheme and any path, and lowercases the host.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = strip_prefix_ignore_case(host, "https://")
        .or_else(|| strip_prefix_ignore_case(host, "http://"))
        .unwrap_or(host);
    let host = host.split('/').next().unwrap_or(host);
    host.to_lowercase()
}

/// True when `host` explicitly asks for plain `http://`.
pub fn is_plain_http(host: &str) -> bool {
    strip_prefix_ignore_case(host.trim(), "http://").is_some()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("api.pulumi.com"), "api.pulumi.com");
        assert_eq!(normalize_host("  https://Pulumi.Example.com/ "), "pulumi.example.com");
        assert_eq!(normalize_host("http://localhost:8080"), "localhost:8080");
    }

    #[test]
    fn test_normalize_host_strips_path() {
        assert_eq!(normalize_host("https://pulumi.example.com/api/"), "pulumi.example.com");
        assert_eq!(normalize_host("pulumi.example.com/api"), "pulumi.example.com");
        assert_eq!(normalize_host("HTTPS://Pulumi.Example.com:8443/x"), "pulumi.example.com:8443");
    }

    #[test]
    fn test_is_plain_http() {
        assert!(is_plain_http("http://127.0.0.1:4000"));
        assert!(is_plain_http("  HTTP://localhost"));
        assert!(!is_plain_http("https://api.pulumi.com"));
        assert!(!is_plain_http("api.pulumi.com"));
        assert!(!is_plain_http("ht"));
    }
}
