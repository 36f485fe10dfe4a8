//! Session-wide data-source policy for list fetches.
//!
//! The mode is decided once per session (the frontend resolves it from a
//! local override flag plus the build profile and caches it); every list
//! fetch then follows the same plan instead of re-evaluating configuration
//! per call.

/// How list data is sourced for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Canned dataset only; the network is never touched.
    ForceMock,
    /// Development build: try the network, log failures and substitute the
    /// canned dataset so the UI never sees an unhandled error.
    DevFallback,
    /// Production build: failures propagate to the view as inline errors.
    Strict,
}

/// Per-fetch plan derived from the session mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    UseMock,
    Remote { mock_on_failure: bool },
}

pub fn plan_fetch(mode: DataMode) -> FetchPlan {
    match mode {
        DataMode::ForceMock => FetchPlan::UseMock,
        DataMode::DevFallback => FetchPlan::Remote {
            mock_on_failure: true,
        },
        DataMode::Strict => FetchPlan::Remote {
            mock_on_failure: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_mock_never_plans_a_request() {
        // Regardless of how often we plan, mock mode stays off the network.
        for _ in 0..3 {
            assert_eq!(plan_fetch(DataMode::ForceMock), FetchPlan::UseMock);
        }
    }

    #[test]
    fn dev_falls_back_and_prod_propagates() {
        assert_eq!(
            plan_fetch(DataMode::DevFallback),
            FetchPlan::Remote {
                mock_on_failure: true
            }
        );
        assert_eq!(
            plan_fetch(DataMode::Strict),
            FetchPlan::Remote {
                mock_on_failure: false
            }
        );
    }
}
