use axum::response::Html;

const CLIENT_PAGE: &str = include_str!("../../../client/index.html");

pub async fn client_page() -> Html<&'static str> {
    Html(CLIENT_PAGE)
}

pub async fn health() -> &'static str {
    "ok"
}
