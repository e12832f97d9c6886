use super::defaults::DEFAULT_PORT;
use super::types::HostAddr;
use crate::error::ValidationError;

/// Parses `host[:port]`, dropping an `http://` or `https://` prefix.
///
/// # Errors
///
/// Returns an error when the host is empty or the port is not a valid `u16`.
pub fn parse_host(s: &str) -> Result<HostAddr, ValidationError> {
    let trimmed = s.trim();
    let without_scheme = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .unwrap_or(trimmed);
    let authority = without_scheme.trim_end_matches('/');

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|err| ValidationError::InvalidPort {
                    value: s.to_owned(),
                    source: err,
                })?;
            (host.trim(), port)
        }
        None => (authority, DEFAULT_PORT),
    };
    if host.is_empty() {
        return Err(ValidationError::EmptyHost);
    }

    Ok(HostAddr {
        host: host.to_owned(),
        port,
    })
}
