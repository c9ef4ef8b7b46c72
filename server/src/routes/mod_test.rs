use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = serve(api_routes(AppState::default())).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn analyze_route_answers_503_when_unconfigured() {
    let base = serve(api_routes(AppState::default())).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/analyze"))
        .json(&serde_json::json!({"text": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 503);
}

#[tokio::test]
async fn analyze_route_rejects_missing_text_field() {
    let base = serve(api_routes(AppState::default())).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/analyze"))
        .json(&serde_json::json!({"message": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
}
