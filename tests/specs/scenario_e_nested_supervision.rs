//! Scenario E — nested supervision: a root task owns a Manager with three
//! children, each of which owns its own Manager with three grandchildren.
//! Cancelling the root must cascade all the way down to every grandchild,
//! and every `work()` call along the way must return.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::prelude::*;

async fn middle_tier(sup: Supervisor, grandchildren_done: Arc<AtomicUsize>) {
    let mgr = new_manager(sup);
    let mut handles = Vec::new();
    for i in 0..3 {
        let writ = mgr.new_task(format!("grandchild-{i}"));
        let counter = grandchildren_done.clone();
        handles.push(tokio::spawn(async move {
            writ.run(move |sup: Supervisor| async move {
                sup.quit_channel().wait().await;
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        }));
    }
    for h in handles {
        h.await.expect("grandchild spawn should not panic");
    }
    mgr.work().await.expect("middle-tier work should succeed");
}

#[tokio::test]
async fn cancelling_root_cascades_to_every_grandchild() {
    let root = new_root_task(["scenario-e"]);
    let root_for_cancel = root.clone();
    let grandchildren_done = Arc::new(AtomicUsize::new(0));
    let gd = grandchildren_done.clone();

    let run_handle = tokio::spawn(async move {
        root.run(move |sup: Supervisor| async move {
            let mgr = new_manager(sup);
            let mut handles = Vec::new();
            for i in 0..3 {
                let writ = mgr.new_task(format!("middle-{i}"));
                let gd = gd.clone();
                handles.push(tokio::spawn(async move {
                    writ.run(move |sup: Supervisor| middle_tier(sup, gd)).await;
                }));
            }
            for h in handles {
                h.await.expect("middle tier spawn should not panic");
            }
            mgr.work().await.expect("root-tier work should succeed");
        })
        .await;
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    root_for_cancel.cancel();

    tokio::time::timeout(Duration::from_secs(5), run_handle)
        .await
        .expect("the whole tree should wind down promptly")
        .expect("root task should not panic");

    assert_eq!(grandchildren_done.load(Ordering::SeqCst), 9);
}
