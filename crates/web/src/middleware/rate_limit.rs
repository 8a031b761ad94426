use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::http::HeaderMap;

/// Fixed-window request limiter keyed by client address.
///
/// Owned by the application state and constructed from config; expired
/// windows are dropped by [`RateLimiter::evict_expired`], which `main`
/// drives on a periodic task. Holds no connection to the calculation
/// core.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, WindowEntry>>,
}

struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count a request against the caller's current window. Returns
    /// whether the request is allowed.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    /// Drop every window whose reset time has passed.
    pub fn evict_expired(&self) {
        self.evict_at(Instant::now());
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");

        let entry = windows.entry(key.to_string()).or_insert(WindowEntry {
            count: 0,
            reset_at: now + self.window,
        });

        if now > entry.reset_at {
            entry.count = 0;
            entry.reset_at = now + self.window;
        }

        entry.count += 1;
        entry.count <= self.max_requests
    }

    fn evict_at(&self, now: Instant) {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        windows.retain(|_, entry| now <= entry.reset_at);
    }
}

/// Client key for rate limiting: the first `x-forwarded-for` entry, or
/// `"unknown"` when the header is missing or unreadable.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_the_cap_within_one_window() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.check_at("10.0.0.1", start));
        assert!(limiter.check_at("10.0.0.1", start + Duration::from_secs(1)));
        assert!(limiter.check_at("10.0.0.1", start + Duration::from_secs(2)));
        assert!(!limiter.check_at("10.0.0.1", start + Duration::from_secs(3)));
    }

    #[test]
    fn test_keys_are_limited_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.check_at("10.0.0.1", start));
        assert!(!limiter.check_at("10.0.0.1", start));
        assert!(limiter.check_at("10.0.0.2", start));
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.check_at("10.0.0.1", start));
        assert!(!limiter.check_at("10.0.0.1", start + Duration::from_secs(30)));
        assert!(limiter.check_at("10.0.0.1", start + Duration::from_secs(61)));
    }

    #[test]
    fn test_eviction_drops_only_expired_windows() {
        let limiter = RateLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();

        limiter.check_at("10.0.0.1", start);
        limiter.check_at("10.0.0.2", start + Duration::from_secs(45));
        limiter.evict_at(start + Duration::from_secs(61));

        let windows = limiter.windows.lock().unwrap();
        assert!(!windows.contains_key("10.0.0.1"));
        assert!(windows.contains_key("10.0.0.2"));
    }

    #[test]
    fn test_client_key_prefers_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        assert_eq!(client_key(&headers), "203.0.113.7");

        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }
}
