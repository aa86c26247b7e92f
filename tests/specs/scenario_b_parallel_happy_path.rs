//! Scenario B — parallel happy path: same two tasks, each dispatched on
//! its own spawned task instead of run serially.

use std::sync::{Arc, Mutex};

use crate::prelude::*;

#[tokio::test]
async fn two_tasks_run_concurrently_and_both_complete() {
    let root = new_root_task(["scenario-b"]);
    let observed = Arc::new(Mutex::new(Vec::new()));

    root.run(move |sup: Supervisor| {
        let observed = observed.clone();
        async move {
            let mgr = new_manager(sup);

            let mut handles = Vec::new();
            for label in ["1", "2"] {
                let writ = mgr.new_task(label);
                let o = observed.clone();
                handles.push(tokio::spawn(async move {
                    writ.run(move |_sup: Supervisor| async move {
                        o.lock().expect("lock poisoned").push(label);
                    })
                    .await;
                }));
            }
            for h in handles {
                h.await.expect("spawned task should not panic");
            }

            mgr.work().await.expect("work should succeed");
            let mut seen = observed.lock().expect("lock poisoned").clone();
            seen.sort_unstable();
            assert_eq!(seen, vec!["1", "2"]);
        }
    })
    .await;

    assert!(root.err().await.is_none());
}
