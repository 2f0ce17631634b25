//! Ambient host identity: machine name and domain-qualified user, read from
//! the process environment. These are inputs to record construction only;
//! the sinks stay decoupled from environment access.

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Host identifier stamped on every record. `COMPUTERNAME` on Windows,
/// `HOSTNAME` elsewhere, `"localhost"` when neither is set.
pub fn machine_name() -> String {
    std::env::var("COMPUTERNAME")
        .or_else(|_| std::env::var("HOSTNAME"))
        .unwrap_or_else(|_| "localhost".to_string())
}

/// Domain-qualified user identity in `DOMAIN\user` form. The domain falls
/// back to the machine name, the user to `"unknown"`.
pub fn user_identity() -> String {
    let domain = env_or("USERDOMAIN", &machine_name());
    let user = std::env::var("USERNAME")
        .or_else(|_| std::env::var("USER"))
        .unwrap_or_else(|_| "unknown".to_string());
    format!("{}\\{}", domain, user)
}
