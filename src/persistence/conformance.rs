//! Behaviour every [`ChoreStorage`] backend must share.
//!
//! Each check takes a freshly created, empty store. Backends call these
//! from their own test modules.

#![allow(clippy::panic)]

use chrono::Utc;

use super::{ChoreStorage, CompletionOutcome, StorageError};
use crate::domain::{ChoreDraft, ChoreId, DEFAULT_POINTS, ExecutionDraft, ExecutionId};

fn dishes() -> ChoreDraft {
    ChoreDraft::new("Dishes", "wash up", 3)
}

fn by_sam() -> ExecutionDraft {
    ExecutionDraft::new("Dishes", "sam", 7)
}

async fn create_ok(store: &dyn ChoreStorage, draft: &ChoreDraft) -> ChoreId {
    match store.create(draft).await {
        Ok(id) => id,
        Err(err) => panic!("create failed: {err}"),
    }
}

async fn complete_ok(store: &dyn ChoreStorage, id: ChoreId) -> CompletionOutcome {
    match store.complete(id, &by_sam()).await {
        Ok(outcome) => outcome,
        Err(err) => panic!("complete failed: {err}"),
    }
}

fn recorded(outcome: CompletionOutcome) -> ExecutionId {
    match outcome {
        CompletionOutcome::Recorded(id) => id,
        CompletionOutcome::AlreadyDone => panic!("expected a recorded execution"),
    }
}

pub(super) async fn create_then_get_round_trips(store: &dyn ChoreStorage) {
    let before = Utc::now();
    let id = create_ok(store, &dishes()).await;

    let Ok(chore) = store.get(id).await else {
        panic!("chore should exist");
    };
    assert_eq!(chore.id, id);
    assert_eq!(chore.name, "Dishes");
    assert_eq!(chore.description, "wash up");
    assert_eq!(chore.points, 3);
    assert!(!chore.done);
    assert_eq!(chore.execution, None);
    let drift = (chore.created - before).num_seconds().abs();
    assert!(drift < 5, "created timestamp drifted {drift}s");
}

pub(super) async fn omitted_points_default_to_one(store: &dyn ChoreStorage) {
    let draft = ChoreDraft {
        name: "Bins".to_string(),
        description: String::new(),
        points: None,
    };
    let id = create_ok(store, &draft).await;
    let Ok(chore) = store.get(id).await else {
        panic!("chore should exist");
    };
    assert_eq!(chore.points, DEFAULT_POINTS);
}

pub(super) async fn ids_increase_and_are_not_reused(store: &dyn ChoreStorage) {
    let first = create_ok(store, &dishes()).await;
    let second = create_ok(store, &dishes()).await;
    assert!(second > first);

    let Ok(()) = store.delete(second).await else {
        panic!("delete failed");
    };
    let third = create_ok(store, &dishes()).await;
    assert!(third > second);
}

pub(super) async fn get_missing_is_not_found(store: &dyn ChoreStorage) {
    let result = store.get(ChoreId::new(404)).await;
    assert!(matches!(result, Err(StorageError::ChoreNotFound(id)) if id == ChoreId::new(404)));
}

pub(super) async fn list_is_ordered_and_todo_is_pending_subset(store: &dyn ChoreStorage) {
    let a = create_ok(store, &ChoreDraft::new("a", "", 1)).await;
    let b = create_ok(store, &ChoreDraft::new("b", "", 1)).await;
    let c = create_ok(store, &ChoreDraft::new("c", "", 1)).await;
    complete_ok(store, b).await;

    let Ok(all) = store.list().await else {
        panic!("list failed");
    };
    let all_ids: Vec<ChoreId> = all.iter().map(|chore| chore.id).collect();
    assert_eq!(all_ids, vec![a, b, c]);

    let Ok(todo) = store.list_todo().await else {
        panic!("list_todo failed");
    };
    let todo_ids: Vec<ChoreId> = todo.iter().map(|chore| chore.id).collect();
    assert_eq!(todo_ids, vec![a, c]);

    let expected: Vec<ChoreId> = all.iter().filter(|chore| !chore.done).map(|chore| chore.id).collect();
    assert_eq!(todo_ids, expected);
}

pub(super) async fn update_overwrites_editable_fields_only(store: &dyn ChoreStorage) {
    let id = create_ok(store, &dishes()).await;
    let execution = recorded(complete_ok(store, id).await);
    let Ok(before) = store.get(id).await else {
        panic!("chore should exist");
    };

    let edit = ChoreDraft::new("Dishes (big pot)", "scrub", 4);
    let Ok(()) = store.update(id, &edit).await else {
        panic!("update failed");
    };

    let Ok(after) = store.get(id).await else {
        panic!("chore should exist");
    };
    assert_eq!(after.name, "Dishes (big pot)");
    assert_eq!(after.description, "scrub");
    assert_eq!(after.points, 4);
    assert!(after.done);
    assert_eq!(after.execution, Some(execution));
    assert_eq!(after.created, before.created);

    // An edit without points falls back to the default, like create does.
    let without_points = ChoreDraft {
        points: None,
        ..edit
    };
    let Ok(()) = store.update(id, &without_points).await else {
        panic!("update failed");
    };
    let Ok(reset) = store.get(id).await else {
        panic!("chore should exist");
    };
    assert_eq!(reset.points, DEFAULT_POINTS);
    assert_eq!(reset.name, "Dishes (big pot)");
}

pub(super) async fn update_missing_is_not_found(store: &dyn ChoreStorage) {
    let result = store.update(ChoreId::new(77), &dishes()).await;
    assert!(matches!(result, Err(StorageError::ChoreNotFound(_))));
}

pub(super) async fn complete_records_execution_and_links_chore(store: &dyn ChoreStorage) {
    let id = create_ok(store, &dishes()).await;
    let execution_id = recorded(complete_ok(store, id).await);

    let Ok(chore) = store.get(id).await else {
        panic!("chore should exist");
    };
    assert!(chore.done);
    assert_eq!(chore.execution, Some(execution_id));

    let Ok(execution) = store.get_execution(execution_id).await else {
        panic!("execution should exist");
    };
    assert_eq!(execution.chore_id, id);
    assert_eq!(execution.points, 3);
    assert_eq!(execution.name, "Dishes");
    assert_eq!(execution.user_name, "sam");
    assert_eq!(execution.user_id, 7);
}

pub(super) async fn complete_twice_is_a_no_op(store: &dyn ChoreStorage) {
    let id = create_ok(store, &dishes()).await;
    let first = recorded(complete_ok(store, id).await);

    let second = store
        .complete(id, &ExecutionDraft::new("again", "alex", 9))
        .await;
    assert!(matches!(second, Ok(CompletionOutcome::AlreadyDone)));

    let Ok(chore) = store.get(id).await else {
        panic!("chore should exist");
    };
    assert_eq!(chore.execution, Some(first));

    let Ok(ledger) = store.list_executions().await else {
        panic!("list_executions failed");
    };
    assert_eq!(ledger.len(), 1);
}

pub(super) async fn complete_missing_is_not_found(store: &dyn ChoreStorage) {
    let result = store.complete(ChoreId::new(12), &by_sam()).await;
    assert!(matches!(result, Err(StorageError::ChoreNotFound(_))));

    let Ok(ledger) = store.list_executions().await else {
        panic!("list_executions failed");
    };
    assert!(ledger.is_empty());
}

pub(super) async fn execution_points_are_a_snapshot(store: &dyn ChoreStorage) {
    let id = create_ok(store, &ChoreDraft::new("Laundry", "", 5)).await;
    let execution_id = recorded(complete_ok(store, id).await);

    let Ok(()) = store.update(id, &ChoreDraft::new("Laundry", "", 10)).await else {
        panic!("update failed");
    };

    let Ok(execution) = store.get_execution(execution_id).await else {
        panic!("execution should exist");
    };
    assert_eq!(execution.points, 5);
}

pub(super) async fn every_execution_reference_is_consistent(store: &dyn ChoreStorage) {
    for n in 0..4 {
        let id = create_ok(store, &ChoreDraft::new(format!("chore {n}"), "", n)).await;
        if n % 2 == 0 {
            complete_ok(store, id).await;
        }
    }

    let Ok(chores) = store.list().await else {
        panic!("list failed");
    };
    for chore in chores {
        let Some(execution_id) = chore.execution else {
            assert!(!chore.done);
            continue;
        };
        assert!(chore.done);
        let Ok(execution) = store.get_execution(execution_id).await else {
            panic!("dangling execution reference on chore {}", chore.id);
        };
        assert_eq!(execution.chore_id, chore.id);
    }
}

pub(super) async fn delete_keeps_execution(store: &dyn ChoreStorage) {
    let id = create_ok(store, &dishes()).await;
    let execution_id = recorded(complete_ok(store, id).await);

    let Ok(()) = store.delete(id).await else {
        panic!("delete failed");
    };
    assert!(matches!(
        store.get(id).await,
        Err(StorageError::ChoreNotFound(_))
    ));

    let Ok(execution) = store.get_execution(execution_id).await else {
        panic!("execution should survive chore deletion");
    };
    assert_eq!(execution.chore_id, id);
}

pub(super) async fn delete_missing_is_ok(store: &dyn ChoreStorage) {
    assert!(store.delete(ChoreId::new(999)).await.is_ok());
}

pub(super) async fn get_missing_execution_is_not_found(store: &dyn ChoreStorage) {
    let result = store.get_execution(ExecutionId::new(31)).await;
    assert!(matches!(result, Err(StorageError::ExecutionNotFound(_))));
}

/// Runs every check against stores produced by `make`.
macro_rules! storage_conformance_tests {
    ($make:expr) => {
        storage_conformance_tests!(@each $make;
            create_then_get_round_trips,
            omitted_points_default_to_one,
            ids_increase_and_are_not_reused,
            get_missing_is_not_found,
            list_is_ordered_and_todo_is_pending_subset,
            update_overwrites_editable_fields_only,
            update_missing_is_not_found,
            complete_records_execution_and_links_chore,
            complete_twice_is_a_no_op,
            complete_missing_is_not_found,
            execution_points_are_a_snapshot,
            every_execution_reference_is_consistent,
            delete_keeps_execution,
            delete_missing_is_ok,
            get_missing_execution_is_not_found
        );
    };
    (@each $make:expr; $($check:ident),+ $(,)?) => {
        $(
            #[tokio::test]
            async fn $check() {
                let store = $make.await;
                $crate::persistence::conformance::$check(&store).await;
            }
        )+
    };
}

pub(crate) use storage_conformance_tests;
