//! Chaos toggle semantics over HTTP.

use std::time::{Duration, Instant};

mod common;

#[tokio::test]
async fn toggle_redirects_to_the_status_page() {
    let (addr, shutdown) = common::start_demo(common::fast_chaos_config(200)).await;
    let client = common::no_redirect_client();

    let res = client
        .get(format!("http://{}/toggle-chaos", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/")
    );

    shutdown.trigger();
}

#[tokio::test]
async fn toggle_alternates_the_transaction_outcome() {
    let (addr, shutdown) = common::start_demo(common::fast_chaos_config(200)).await;
    let client = common::no_redirect_client();
    let transaction_url = format!("http://{}/api/transaction", addr);
    let toggle_url = format!("http://{}/toggle-chaos", addr);

    // Starts healthy
    let res = client.get(&transaction_url).send().await.unwrap();
    assert_eq!(res.status(), 200);

    // One toggle: broken
    client.get(&toggle_url).send().await.unwrap();
    let res = client.get(&transaction_url).send().await.unwrap();
    assert_eq!(res.status(), 500);

    // Second toggle: healthy again
    client.get(&toggle_url).send().await.unwrap();
    let res = client.get(&transaction_url).send().await.unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn double_toggle_restores_fast_responses() {
    let (addr, shutdown) = common::start_demo(common::fast_chaos_config(500)).await;
    let client = common::no_redirect_client();
    let toggle_url = format!("http://{}/toggle-chaos", addr);

    client.get(&toggle_url).send().await.unwrap();
    client.get(&toggle_url).send().await.unwrap();

    let start = Instant::now();
    let res = client
        .get(format!("http://{}/api/transaction", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(
        start.elapsed() < Duration::from_millis(400),
        "after an even number of toggles the delay must be gone"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn status_page_button_tracks_the_switch() {
    let (addr, shutdown) = common::start_demo(common::fast_chaos_config(200)).await;
    let client = common::no_redirect_client();

    let page = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("TRIGGER CHAOS"));

    client
        .get(format!("http://{}/toggle-chaos", addr))
        .send()
        .await
        .unwrap();

    let page = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("REPAIR MANUALLY"));

    shutdown.trigger();
}
