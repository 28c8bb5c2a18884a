use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("__Host-SessionId".to_string())
});

/// Session lifetime in seconds, shared by the cookie Max-Age and the cache TTL
pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    parse_max_age(std::env::var("SESSION_COOKIE_MAX_AGE").ok())
});

/// Browsers cap cookie Max-Age at 400 days
const MAX_SESSION_MAX_AGE: u64 = 400 * 24 * 60 * 60;

fn parse_max_age(value: Option<String>) -> u64 {
    let secs = value
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(3600);

    if secs > MAX_SESSION_MAX_AGE {
        tracing::warn!(
            "SESSION_COOKIE_MAX_AGE {} exceeds {}, clamping",
            secs,
            MAX_SESSION_MAX_AGE
        );
        return MAX_SESSION_MAX_AGE;
    }
    secs
}
