use strum_macros::{Display, IntoStaticStr};

use super::error::RelayError;

/// Upstream sub-resources the relay is willing to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Endpoint {
    #[strum(serialize = "satellite/positions")]
    Positions,
    #[strum(serialize = "satellite/above")]
    Above,
    #[strum(serialize = "satellite/visualpasses")]
    VisualPasses,
    #[strum(serialize = "satellite/info")]
    Info,
    #[strum(serialize = "satellite/risetimes")]
    RiseTimes,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Positions,
        Endpoint::Above,
        Endpoint::VisualPasses,
        Endpoint::Info,
        Endpoint::RiseTimes,
    ];

    pub fn prefix(self) -> &'static str {
        self.into()
    }

    fn matching(path: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|endpoint| path.starts_with(endpoint.prefix()))
    }
}

/// Validates a relay path (the part after the relay mount point) against the allowlist.
pub fn check_path(path: &str) -> Result<Endpoint, RelayError> {
    if path.is_empty() {
        return Err(RelayError::MissingPath);
    }

    // `..` would be collapsed by URL normalisation and escape the matched prefix.
    if path.split('/').any(|segment| segment == "..") {
        return Err(RelayError::NotAllowed(path.to_string()));
    }

    Endpoint::matching(path).ok_or_else(|| RelayError::NotAllowed(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allowlisted_prefix() {
        assert_eq!(
            check_path("satellite/positions/25544/1/2/0/60").unwrap(),
            Endpoint::Positions
        );
        assert_eq!(
            check_path("satellite/visualpasses/25544/1/2/0/10/300").unwrap(),
            Endpoint::VisualPasses
        );
        assert_eq!(check_path("satellite/above/1/2/0/70/18").unwrap(), Endpoint::Above);
        assert_eq!(check_path("satellite/info/25544").unwrap(), Endpoint::Info);
        assert_eq!(
            check_path("satellite/risetimes/25544/1/2/0/10").unwrap(),
            Endpoint::RiseTimes
        );
    }

    #[test]
    fn rejects_unknown_prefixes() {
        for path in ["satellite/tle/25544", "admin", "/satellite/positions/1", "sat"] {
            assert!(
                matches!(check_path(path), Err(RelayError::NotAllowed(_))),
                "{path} should be forbidden"
            );
        }
    }

    #[test]
    fn rejects_parent_segments_under_allowed_prefix() {
        let err = check_path("satellite/positions/../../tle/25544").unwrap_err();
        assert!(matches!(err, RelayError::NotAllowed(_)));
    }

    #[test]
    fn empty_path_is_missing() {
        assert!(matches!(check_path(""), Err(RelayError::MissingPath)));
    }

    #[test]
    fn prefix_matches_display() {
        assert_eq!(Endpoint::RiseTimes.prefix(), "satellite/risetimes");
        assert_eq!(Endpoint::Info.to_string(), "satellite/info");
    }
}
