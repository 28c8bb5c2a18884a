use std::sync::LazyLock;

/// Minimum accepted password length at sign-up
pub static PASSWORD_MIN_LENGTH: LazyLock<usize> = LazyLock::new(|| {
    std::env::var("PASSWORD_MIN_LENGTH")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8)
});

/// Whether sign-up may request `access_level: "admin"`. Defaults to `true`.
pub static ALLOW_PRIVILEGED_SIGN_UP: LazyLock<bool> = LazyLock::new(|| {
    parse_flag(
        "ALLOW_PRIVILEGED_SIGN_UP",
        std::env::var("ALLOW_PRIVILEGED_SIGN_UP").ok().as_deref(),
        true,
    )
});

fn parse_flag(name: &str, value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => default,
        Some("true" | "1" | "yes") => true,
        Some("false" | "0" | "no") => false,
        Some(other) => {
            tracing::warn!("Invalid {} '{}', using {}", name, other, default);
            default
        }
    }
}
