//! Scenario D — cancelling a Writ before it ever runs makes `run` a no-op
//! and leaves it cleanly terminated.

use crate::prelude::*;

#[tokio::test]
async fn cancel_before_run_skips_the_agent() {
    let writ = new_root_task(["scenario-d"]);
    writ.cancel();

    writ.run(|_sup: Supervisor| async move {
        panic!("this agent must never be invoked");
    })
    .await;

    assert!(writ.err().await.is_none());
    assert!(writ.done_channel().is_blown());
}

#[tokio::test]
async fn cancel_before_run_under_a_manager_still_gets_reaped() {
    let root = new_root_task(["scenario-d-managed"]);

    root.run(|sup: Supervisor| async move {
        let mgr = new_manager(sup);
        let writ = mgr.new_task("never-started");
        writ.cancel();
        writ.run(|_sup: Supervisor| async move {
            panic!("this agent must never be invoked");
        })
        .await;

        mgr.work().await.expect("work should succeed even with no agents run");
    })
    .await;
}
