//! Scenario F — a Looper-wrapped agent keeps running its body until the
//! outer supervisor cancels; the body runs at least once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::prelude::*;

#[tokio::test]
async fn looped_worker_runs_until_cancelled() {
    let root = new_root_task(["scenario-f"]);
    let root_for_cancel = root.clone();
    let iterations = Arc::new(AtomicUsize::new(0));
    let iter_count = iterations.clone();

    let run_handle = tokio::spawn(async move {
        root.run(move |sup: Supervisor| async move {
            let mgr = new_manager(sup);
            let worker = mgr.new_task("picker");
            let counter = iter_count.clone();
            let handle = tokio::spawn(async move {
                worker
                    .run(looper(move |_sup: Supervisor| {
                        let counter = counter.clone();
                        async move {
                            counter.fetch_add(1, Ordering::SeqCst);
                            tokio::time::sleep(Duration::from_millis(10)).await;
                        }
                    }))
                    .await;
            });
            handle.await.expect("worker spawn should not panic");
            mgr.work().await.expect("work should succeed");
        })
        .await;
    });

    tokio::time::sleep(Duration::from_millis(45)).await;
    root_for_cancel.cancel();

    tokio::time::timeout(Duration::from_secs(5), run_handle)
        .await
        .expect("looped worker should wind down promptly")
        .expect("root task should not panic");

    assert!(iterations.load(Ordering::SeqCst) >= 1);
}
