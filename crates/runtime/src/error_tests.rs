use super::*;
use sup_core::WritName;

#[test]
fn display_message_names_task_and_cause() {
    let err = SupervisionError::TaskPanicked {
        task: WritName::root().append("worker-1"),
        cause: "bang".to_string(),
    };
    assert_eq!(err.to_string(), "task \"worker-1\" panicked: bang");
}

#[test]
fn accessors_return_stored_fields() {
    let task = WritName::root().append("e");
    let err = SupervisionError::TaskPanicked {
        task: task.clone(),
        cause: "bang".to_string(),
    };
    assert_eq!(err.task(), &task);
    assert_eq!(err.cause(), "bang");
}

#[test]
fn render_panic_payload_handles_str() {
    let payload: Box<dyn std::any::Any + Send> = Box::new("bang");
    assert_eq!(render_panic_payload(payload.as_ref()), "bang");
}

#[test]
fn render_panic_payload_handles_string() {
    let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
    assert_eq!(render_panic_payload(payload.as_ref()), "bang");
}

#[test]
fn render_panic_payload_handles_unknown_type() {
    let payload: Box<dyn std::any::Any + Send> = Box::new(42i32);
    assert_eq!(
        render_panic_payload(payload.as_ref()),
        "agent panicked with a non-string payload"
    );
}
