//! Record counts for the admin dashboard

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;
use crate::resource::ResourceKind;

/// One dashboard tile. `count` is `None` when that listing could not be
/// fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCount {
    pub kind: ResourceKind,
    pub count: Option<usize>,
}

/// Keep whatever arrived. An auth failure on any listing fails the whole
/// set, since the session is over and the caller has to sign out.
pub fn collect_counts(
    results: Vec<(ResourceKind, Result<usize, ApiError>)>,
) -> Result<Vec<ResourceCount>, ApiError> {
    let mut counts = Vec::with_capacity(results.len());
    for (kind, result) in results {
        let count = match result {
            Ok(count) => Some(count),
            Err(err) if err.is_auth_failure() => return Err(err),
            Err(err) => {
                warn!(resource = kind.label(), error = %err, "dashboard count unavailable");
                None
            }
        };
        counts.push(ResourceCount { kind, count });
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_failed_listing_keeps_the_rest() {
        let counts = collect_counts(vec![
            (ResourceKind::Packages, Ok(4)),
            (ResourceKind::Teachers, Err(ApiError::Network("timed out".to_string()))),
            (ResourceKind::Faqs, Ok(0)),
        ])
        .unwrap();

        assert_eq!(
            counts,
            vec![
                ResourceCount { kind: ResourceKind::Packages, count: Some(4) },
                ResourceCount { kind: ResourceKind::Teachers, count: None },
                ResourceCount { kind: ResourceKind::Faqs, count: Some(0) },
            ]
        );
    }

    #[test]
    fn test_expired_session_fails_the_dashboard() {
        let result = collect_counts(vec![
            (ResourceKind::Packages, Ok(4)),
            (ResourceKind::Applications, Err(ApiError::Unauthorized)),
        ]);

        assert_eq!(result, Err(ApiError::Unauthorized));
    }
}
