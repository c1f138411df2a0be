//! Data-access layer: the shared list cache and server pagination state.

mod pagination;
mod query_cache;

pub use pagination::{PagedListState, RequestGuard};
pub use query_cache::{use_query_cache, QueryCache};

/// Reconciliation policy for the optimistic delete flow: the row is removed
/// from the cached list before the DELETE settles; a failed request is
/// reconciled by refetching the authoritative page instead of rolling back
/// by hand.
#[must_use]
pub fn delete_needs_refetch(outcome: &Result<(), String>) -> bool {
    match outcome {
        Ok(()) => false,
        Err(e) => {
            log::warn!("delete failed, refetching authoritative list: {}", e);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_delete_keeps_optimistic_state() {
        assert!(!delete_needs_refetch(&Ok(())));
    }

    #[test]
    fn failed_delete_reconciles_by_refetch() {
        assert!(delete_needs_refetch(&Err("HTTP 500".into())));
    }
}
