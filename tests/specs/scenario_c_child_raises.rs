//! Scenario C — one child raises; the other two observe quit and return
//! cleanly; `work()` surfaces the panicking child's error.

use std::time::Duration;

use crate::prelude::*;

#[tokio::test]
async fn one_panicking_child_cancels_siblings_and_surfaces_its_error() {
    let root = new_root_task(["scenario-c"]);

    root.run(|sup: Supervisor| async move {
        let mgr = new_manager(sup);

        let good_a = mgr.new_task("a");
        let good_b = mgr.new_task("b");
        let bad = mgr.new_task("e");

        let handle_a = tokio::spawn(async move {
            good_a.run(wait_for_quit).await;
        });
        let handle_b = tokio::spawn(async move {
            good_b.run(wait_for_quit).await;
        });
        let handle_bad = tokio::spawn(async move {
            bad.run(|_sup: Supervisor| async move { panic!("bang") }).await;
        });

        let result = tokio::time::timeout(Duration::from_secs(5), mgr.work())
            .await
            .expect("work should not hang");
        let err = result.expect_err("the panicking child should surface an error");
        assert_eq!(err.task().coda(), "e");
        assert_eq!(err.cause(), "bang");

        handle_a.await.expect("sibling a's spawn should not panic");
        handle_b.await.expect("sibling b's spawn should not panic");
        handle_bad.await.expect("bad's spawn should not panic");
    })
    .await;
}
