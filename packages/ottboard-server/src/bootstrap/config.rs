use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

pub(crate) fn server_addr_from_env() -> Result<SocketAddr> {
    let addr_text = std::env::var("OTTBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    addr_text
        .parse()
        .with_context(|| format!("invalid OTTBOARD_ADDR: {addr_text}"))
}

pub(crate) fn cron_secret_from_env() -> Option<String> {
    std::env::var("OTTBOARD_CRON_SECRET")
        .ok()
        .filter(|secret| !secret.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the three cases share one env var and must not race.
    #[test]
    fn test_server_addr_from_env() {
        unsafe {
            std::env::remove_var("OTTBOARD_ADDR");
            assert_eq!(server_addr_from_env().unwrap().port(), 3000);

            std::env::set_var("OTTBOARD_ADDR", "127.0.0.1:8080");
            assert_eq!(server_addr_from_env().unwrap().port(), 8080);

            std::env::set_var("OTTBOARD_ADDR", "not-an-addr");
            assert!(server_addr_from_env().is_err());

            std::env::remove_var("OTTBOARD_ADDR");
        }
    }

    #[test]
    fn test_cron_secret_empty_counts_as_unset() {
        unsafe {
            std::env::set_var("OTTBOARD_CRON_SECRET", "");
            assert!(cron_secret_from_env().is_none());
            std::env::remove_var("OTTBOARD_CRON_SECRET");
        }
    }
}
