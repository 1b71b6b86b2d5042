//! Platform queries.

/// Whether the engine was built for macOS.
///
/// Hosts use this to pick platform-specific key/mouse conventions.
pub const fn is_mac() -> bool {
    cfg!(target_os = "macos")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_target_os() {
        assert_eq!(is_mac(), cfg!(target_os = "macos"));
    }
}
