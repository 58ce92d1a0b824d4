use crate::shared::constants::DEFAULT_CAPTURE_RETRY_LIMIT;

/// Named policy for transient capture failures.
///
/// The original behavior (retry forever, no backoff) is available as
/// `Indefinite`; `Bounded` caps *consecutive* drops so a disconnected
/// device cannot spin the loop indefinitely. A successful read resets
/// the count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryPolicy {
    Indefinite,
    Bounded(u32),
}

impl RetryPolicy {
    /// Whether the loop may retry after `consecutive_failures` drops.
    pub fn allows(&self, consecutive_failures: u32) -> bool {
        match self {
            RetryPolicy::Indefinite => true,
            RetryPolicy::Bounded(limit) => consecutive_failures <= *limit,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Bounded(DEFAULT_CAPTURE_RETRY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_indefinite_always_allows() {
        assert!(RetryPolicy::Indefinite.allows(0));
        assert!(RetryPolicy::Indefinite.allows(u32::MAX));
    }

    #[rstest]
    #[case::under_limit(3, 2, true)]
    #[case::at_limit(3, 3, true)]
    #[case::over_limit(3, 4, false)]
    #[case::zero_limit_first_failure(0, 1, false)]
    fn test_bounded(#[case] limit: u32, #[case] failures: u32, #[case] expected: bool) {
        assert_eq!(RetryPolicy::Bounded(limit).allows(failures), expected);
    }

    #[test]
    fn test_default_is_bounded() {
        assert_eq!(
            RetryPolicy::default(),
            RetryPolicy::Bounded(DEFAULT_CAPTURE_RETRY_LIMIT)
        );
    }
}
