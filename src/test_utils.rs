use axum::Router;
use url::Url;

/// Serve `router` on an ephemeral localhost port, returning its base url.
/// The server lives until the test's runtime shuts down.
pub async fn spawn_stub_server(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{address}/")).unwrap()
}
