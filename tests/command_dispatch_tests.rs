//! Command dispatch tests: preconditions, display slot handling and
//! overlapping in-flight requests

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::Notify;

use common::{MockBackend, console_with};

fn command_json(retdata: &str, resdescr: &str, kkmerr: &str) -> serde_json::Value {
    json!({
        "retdata": retdata,
        "resdescr": resdescr,
        "kkmerr": kkmerr,
        "error": false,
        "message": "",
    })
}

#[tokio::test]
async fn empty_device_or_command_is_a_silent_noop() {
    let backend = Arc::new(MockBackend::new());
    let console = console_with(backend.clone(), "");

    console.run_command("", "status", &[30]).await;
    console.run_command("dev-a", "", &[30]).await;

    assert!(backend.call_names().is_empty());
    let state = console.state().await;
    assert!(!state.notifications.busy());
    assert!(!state.notifications.alert);
    assert!(!state.notifications.success);
    assert!(state.command_output.is_empty());
}

#[tokio::test]
async fn successful_command_fills_display_and_registrar_error() {
    let backend = Arc::new(MockBackend::new());
    backend.queue_command_response(
        json!({
            "retdata": ["0", "4", "22"],
            "resdescr": "status ok",
            "kkmerr": "fiscal storage almost full",
            "error": false,
            "message": "",
        }),
        None,
    );
    let console = console_with(backend, "");

    console.run_command("dev-a", "status", &[30]).await;

    let state = console.state().await;
    assert_eq!(state.command_output, "0\n4\n22\nstatus ok");
    assert_eq!(state.kkm_error, "fiscal storage almost full");
    // registrar-level error does not raise the error banner
    assert!(!state.notifications.alert);
    assert!(!state.notifications.busy());
}

#[tokio::test]
async fn application_error_raises_banner_and_blanks_display() {
    let backend = Arc::new(MockBackend::new());
    backend.queue_command_response(command_json("42", "ok", ""), None);
    backend.queue_command_response(json!({"error": true, "message": "device is busy"}), None);
    let console = console_with(backend, "");

    console.run_command("dev-a", "status", &[30]).await;
    assert_eq!(console.state().await.command_output, "42\nok");

    console.run_command("dev-a", "reset", &[30]).await;

    let state = console.state().await;
    // the prior result was blanked at dispatch start and the error path
    // leaves the display untouched
    assert!(state.command_output.is_empty());
    assert!(state.notifications.alert);
    assert_eq!(state.notifications.error_msg, "device is busy");
}

#[tokio::test]
async fn transport_failure_raises_banner() {
    let backend = Arc::new(MockBackend::new());
    backend.queue_command_response(serde_json::Value::Null, None);
    let console = console_with(backend, "");

    console.run_command("dev-a", "status", &[30]).await;

    let state = console.state().await;
    assert!(state.notifications.alert);
    assert!(state.notifications.error_msg.contains("status"));
    assert!(!state.notifications.busy());
}

async fn overlapping_dispatch(first_resolves_last: bool) -> String {
    let backend = Arc::new(MockBackend::new());
    let gate_first = Arc::new(Notify::new());
    let gate_second = Arc::new(Notify::new());
    backend.queue_command_response(command_json("FIRST", "", ""), Some(gate_first.clone()));
    backend.queue_command_response(command_json("SECOND", "", ""), Some(gate_second.clone()));
    let console = console_with(backend, "");

    let driver = async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        if first_resolves_last {
            gate_second.notify_one();
            tokio::time::sleep(Duration::from_millis(30)).await;
            gate_first.notify_one();
        } else {
            gate_first.notify_one();
            tokio::time::sleep(Duration::from_millis(30)).await;
            gate_second.notify_one();
        }
    };

    tokio::join!(
        console.run_command("dev-a", "status", &[30]),
        console.run_command("dev-a", "reset", &[30]),
        driver,
    );

    let state = console.state().await;
    assert!(!state.notifications.busy(), "in-flight count must drain");
    state.command_output
}

#[tokio::test]
async fn overlapping_dispatches_last_to_resolve_wins() {
    // both responses raced for the display slot; whichever resolved
    // last owns it, regardless of issue order
    let output = overlapping_dispatch(false).await;
    assert_eq!(output, "SECOND");

    let output = overlapping_dispatch(true).await;
    assert_eq!(output, "FIRST");
}

#[tokio::test]
async fn dispatch_clears_edit_slot_and_previous_registrar_error() {
    let backend = Arc::new(MockBackend::new());
    backend.set_registry(common::registry_json(&["dev-a"]));
    backend.queue_command_response(command_json("", "", "paper out"), None);
    backend.queue_command_response(command_json("1", "done", ""), None);
    let console = console_with(backend, "");
    console.load_settings().await;

    console.get_profile("dev-a").await;
    console.run_command("dev-a", "status", &[30]).await;
    let state = console.state().await;
    assert!(state.edit_profile.is_none());
    assert_eq!(state.kkm_error, "paper out");

    console.run_command("dev-a", "beep", &[30]).await;
    let state = console.state().await;
    assert_eq!(state.kkm_error, "");
    assert_eq!(state.command_output, "1\ndone");
}
