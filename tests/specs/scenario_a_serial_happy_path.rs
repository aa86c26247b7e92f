//! Scenario A — serial happy path: two tasks run one after another inside
//! a single Manager, each recording its own label before the next starts.

use std::sync::{Arc, Mutex};

use crate::prelude::*;

#[tokio::test]
async fn two_tasks_run_in_call_order() {
    let root = new_root_task(["scenario-a"]);
    let observed = Arc::new(Mutex::new(Vec::new()));

    root.run(move |sup: Supervisor| {
        let observed = observed.clone();
        async move {
            let mgr = new_manager(sup);

            let o1 = observed.clone();
            mgr.new_task("1")
                .run(move |_sup: Supervisor| async move {
                    o1.lock().expect("lock poisoned").push("1");
                })
                .await;

            let o2 = observed.clone();
            mgr.new_task("2")
                .run(move |_sup: Supervisor| async move {
                    o2.lock().expect("lock poisoned").push("2");
                })
                .await;

            mgr.work().await.expect("work should succeed");
            assert_eq!(*observed.lock().expect("lock poisoned"), vec!["1", "2"]);
            assert!(mgr.done_channel().is_blown());
        }
    })
    .await;

    assert!(root.err().await.is_none());
}
