use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Welcome</title>
</head>
<body>
    <h1>REST API</h1>
    <p>Choose an option:</p>
    <ul>
        <li><a href="/cars">Cars</a></li>
        <li><a href="/furniture">Furniture</a></li>
        <li><a href="/flowers">Flowers</a></li>
    </ul>
</body>
</html>
"#;

pub async fn handle_home() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
