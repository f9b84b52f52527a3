use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request for `key`. Returns false when `key` already made
    /// `max_requests` requests within `window`.
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();
        entry.retain(|&time| now.duration_since(time).unwrap_or(Duration::from_secs(0)) < window);

        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);

        // Drop idle keys so the map does not grow without bound.
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Page slugs: lowercase ASCII letters, digits, hyphens and underscores.
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 255 {
        return false;
    }

    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Compares tokens without short-circuiting on the first differing byte.
pub fn tokens_match(expected: &str, provided: &str) -> bool {
    let (a, b) = (expected.as_bytes(), provided.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
