//! Per-item batch execution with optional continue-on-failure.
//!
//! Workflow hosts feed items through one sequential call chain: validate,
//! build, send, await, next item. [`for_each_item`] reproduces that loop for
//! SDK callers: by default the first failure aborts the batch; with
//! `continue_on_fail` the failure is captured as a structured outcome and
//! processing moves on to the next item.

use crate::error::SdkError;
use serde::Serialize;
use std::future::Future;

/// A captured per-item failure, reported alongside the resource/operation
/// that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ItemFailure {
    pub resource: String,
    pub operation: String,
    pub item_index: usize,
    pub error: String,
}

/// The result of processing one item.
#[derive(Debug)]
pub enum ItemOutcome<T> {
    Success(T),
    Failure(ItemFailure),
}

impl<T> ItemOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ItemOutcome::Success(_))
    }
}

/// Run `operation_fn` once per item, sequentially.
///
/// Items never share state; each gets its own call chain and the loop only
/// advances once the previous item's request has settled.
pub async fn for_each_item<It, T, F, Fut>(
    resource: &str,
    operation: &str,
    items: &[It],
    continue_on_fail: bool,
    mut operation_fn: F,
) -> Result<Vec<ItemOutcome<T>>, SdkError>
where
    F: FnMut(usize, &It) -> Fut,
    Fut: Future<Output = Result<T, SdkError>>,
{
    let mut outcomes = Vec::with_capacity(items.len());

    for (item_index, item) in items.iter().enumerate() {
        match operation_fn(item_index, item).await {
            Ok(value) => outcomes.push(ItemOutcome::Success(value)),
            Err(error) if continue_on_fail => {
                tracing::warn!(resource, operation, item_index, "item failed: {error}");
                outcomes.push(ItemOutcome::Failure(ItemFailure {
                    resource: resource.to_string(),
                    operation: operation.to_string(),
                    item_index,
                    error: error.to_string(),
                }));
            }
            Err(error) => return Err(error),
        }
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[tokio::test]
    async fn test_first_failure_aborts_by_default() {
        let items = vec!["ok", "bad", "ok"];
        let result = for_each_item("envelope", "create", &items, false, |_, item| {
            let item = item.to_string();
            async move {
                if item == "bad" {
                    Err(ValidationError::Required {
                        field: "Email Subject".into(),
                    }
                    .into())
                } else {
                    Ok(item)
                }
            }
        })
        .await;

        assert!(matches!(result, Err(SdkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_continue_on_fail_captures_and_proceeds() {
        let items = vec!["ok", "bad", "ok"];
        let outcomes = for_each_item("envelope", "create", &items, true, |_, item| {
            let item = item.to_string();
            async move {
                if item == "bad" {
                    Err(SdkError::Other("boom".into()))
                } else {
                    Ok(item)
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
        assert!(outcomes[2].is_success());

        match &outcomes[1] {
            ItemOutcome::Failure(failure) => {
                assert_eq!(failure.resource, "envelope");
                assert_eq!(failure.operation, "create");
                assert_eq!(failure.item_index, 1);
                assert!(failure.error.contains("boom"));
            }
            ItemOutcome::Success(_) => panic!("expected failure"),
        }
    }
}
