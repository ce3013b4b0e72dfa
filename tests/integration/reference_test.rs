//! Integration tests for static reference data.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_tracks() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/reference/tracks", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let tracks = response.body.as_array().unwrap();
    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0]["id"], "t1");
    assert_eq!(tracks[0]["minPassingAvg"], 75.0);
    assert_eq!(tracks[1]["minPassingAvg"], 70.0);
}

#[tokio::test]
async fn test_statuses_in_display_order() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/reference/statuses", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let statuses = response.body.as_array().unwrap();
    assert_eq!(statuses.len(), 12);
    assert_eq!(statuses[0]["status"], "Imported");
    assert_eq!(statuses[0]["stage"], 0);
    assert_eq!(statuses[11]["stage"], 4);

    // Display order is strictly increasing.
    let orders: Vec<i64> = statuses
        .iter()
        .map(|s| s["displayOrder"].as_i64().unwrap())
        .collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);
}
