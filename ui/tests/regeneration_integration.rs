//! Integration tests for the reactive regeneration pipeline.
//!
//! Parameter edits are committed straight through the state context (the
//! same path the form widgets take) rather than through synthesized
//! keyboard input; what these tests pin down is the store → pipeline →
//! preview flow and its ordering guarantees, not egui's text editing.

mod common;

use std::time::Duration;

use kittest::Queryable;

use crate::common::{current_image, decoded_size, edit_params, new_harness, settle};

#[tokio::test]
async fn empty_input_shows_hint_and_no_image() {
    let mut harness = new_harness();
    harness.step();

    assert!(current_image(&harness).is_absent());
    assert!(
        harness.query_by_label_contains("Enter data").is_some(),
        "empty state should show the input hint"
    );
}

#[tokio::test]
async fn entering_text_generates_a_preview() {
    let mut harness = new_harness();
    harness.step();

    edit_params(&mut harness, |p| p.text = "https://example.com".to_owned());
    settle(&mut harness).await;

    let image = current_image(&harness);
    assert!(!image.is_absent());
    assert_eq!(decoded_size(&image), (128, 128));

    assert!(
        harness.query_by_label_contains("Enter data").is_none(),
        "hint should disappear once a preview is shown"
    );
}

#[tokio::test]
async fn clearing_text_clears_the_preview() {
    let mut harness = new_harness();
    harness.step();

    edit_params(&mut harness, |p| p.text = "https://example.com".to_owned());
    settle(&mut harness).await;
    assert!(!current_image(&harness).is_absent());

    edit_params(&mut harness, |p| p.text.clear());
    settle(&mut harness).await;

    assert!(current_image(&harness).is_absent());
    assert!(
        harness.query_by_label_contains("Enter data").is_some(),
        "hint should return after the text is cleared"
    );
}

#[tokio::test]
async fn dimensions_follow_the_parameters() {
    let mut harness = new_harness();
    harness.step();

    edit_params(&mut harness, |p| {
        p.text = "hello".to_owned();
        p.width = 64;
        p.height = 32;
    });
    settle(&mut harness).await;

    assert_eq!(decoded_size(&current_image(&harness)), (64, 32));
}

/// Two edits in quick succession: the final visible image must correspond to
/// the second edit, even if the first encode completes after the second was
/// requested.
#[tokio::test]
async fn rapid_edits_show_the_latest_result() {
    let mut harness = new_harness();
    harness.step();

    edit_params(&mut harness, |p| p.text = "first".to_owned());
    // One frame starts the first encode without waiting for it.
    harness.step();

    edit_params(&mut harness, |p| {
        p.text = "second".to_owned();
        p.width = 256;
        p.height = 256;
    });
    settle(&mut harness).await;

    // Give the superseded encode time to straggle in, then drain again.
    tokio::time::sleep(Duration::from_millis(100)).await;
    harness.step();

    assert_eq!(
        decoded_size(&current_image(&harness)),
        (256, 256),
        "a stale completion must never overwrite the newer result"
    );
}
