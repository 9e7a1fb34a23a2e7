use crate::store::{AlbumError, AlbumFields, SharedAlbumStore};
use albums_common::{Album, AlbumId};
use axum::{
    extract::{rejection::JsonRejection, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

pub const WELCOME_MESSAGE: &str = "Hit the /albums endpoint to retrieve a list of albums!";

/// Create the album API router
pub fn create_router(store: SharedAlbumStore) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/:id",
            get(get_album).put(update_album).delete(delete_album),
        )
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    debug!("{method} {path} -> {}", response.status().as_u16());
    response
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn album_error_to_response(err: AlbumError) -> Response {
    match err {
        AlbumError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string()),
        AlbumError::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        AlbumError::IdsExhausted(_) => {
            warn!("Rejected create: {err}");
            error_response(StatusCode::CONFLICT, err.to_string())
        }
    }
}

fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Album not found")
}

/// Path ids that are not positive integers can never match an album.
fn parse_album_id(raw: &str) -> Option<AlbumId> {
    raw.parse::<AlbumId>().ok().filter(|id| *id > 0)
}

/// A request without a JSON content type carries no fields. Bodies that claim
/// to be JSON and fail to parse are rejected with 400.
fn body_or_bad_request(
    body: Result<Json<AlbumFields>, JsonRejection>,
) -> Result<AlbumFields, Response> {
    match body {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(AlbumFields::default()),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(error_response(
                StatusCode::BAD_REQUEST,
                rejection.body_text(),
            ))
        }
    }
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn health(State(store): State<SharedAlbumStore>) -> Response {
    let count = store.read().await.len();
    Json(json!({ "status": "ok", "albums": count })).into_response()
}

async fn list_albums(State(store): State<SharedAlbumStore>) -> Json<Vec<Album>> {
    Json(store.read().await.list().to_vec())
}

async fn get_album(State(store): State<SharedAlbumStore>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_album_id(&raw_id) else {
        return not_found();
    };
    match store.read().await.get(id) {
        Ok(album) => Json(album.clone()).into_response(),
        Err(err) => album_error_to_response(err),
    }
}

async fn create_album(
    State(store): State<SharedAlbumStore>,
    body: Result<Json<AlbumFields>, JsonRejection>,
) -> Response {
    let fields = match body_or_bad_request(body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    match store.write().await.create(fields) {
        Ok(album) => (StatusCode::CREATED, Json(album)).into_response(),
        Err(err) => album_error_to_response(err),
    }
}

async fn update_album(
    State(store): State<SharedAlbumStore>,
    Path(raw_id): Path<String>,
    body: Result<Json<AlbumFields>, JsonRejection>,
) -> Response {
    let Some(id) = parse_album_id(&raw_id) else {
        return not_found();
    };
    let mut store = store.write().await;
    if let Err(err) = store.get(id) {
        return album_error_to_response(err);
    }
    let fields = match body_or_bad_request(body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    match store.update(id, fields) {
        Ok(album) => Json(album).into_response(),
        Err(err) => album_error_to_response(err),
    }
}

async fn delete_album(
    State(store): State<SharedAlbumStore>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_album_id(&raw_id) else {
        return not_found();
    };
    match store.write().await.delete(id) {
        Ok(album) => Json(album).into_response(),
        Err(err) => album_error_to_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_seed;
    use crate::store::{AlbumStore, IdStrategy};
    use axum::body::Body;
    use axum::http::{header, Method};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(SharedAlbumStore::new(AlbumStore::new(
            default_seed(),
            IdStrategy::MaxPlusOne,
        )))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn parse_album_id_accepts_only_positive_integers() {
        assert_eq!(parse_album_id("1"), Some(1));
        assert_eq!(parse_album_id("42"), Some(42));
        assert_eq!(parse_album_id("0"), None);
        assert_eq!(parse_album_id("-1"), None);
        assert_eq!(parse_album_id("abc"), None);
        assert_eq!(parse_album_id(""), None);
    }

    #[tokio::test]
    async fn welcome_text() {
        let response = app().oneshot(empty_request(Method::GET, "/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], WELCOME_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn health_reports_album_count() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["albums"], 6);
    }

    #[tokio::test]
    async fn list_returns_seed() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/albums"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let albums = body.as_array().unwrap();
        assert_eq!(albums.len(), 6);
        let first = &albums[0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["title"], "You, Me and an App Id");
        assert_eq!(first["artist"], "Daprize");
        assert_eq!(first["price"], 10.99);
        assert_eq!(first["image_url"], "https://aka.ms/albums-daprlogo");
    }

    #[tokio::test]
    async fn get_by_id() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/albums/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "You, Me and an App Id");
    }

    #[tokio::test]
    async fn get_missing_is_404_with_error_body() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/albums/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Album not found");
    }

    #[tokio::test]
    async fn get_non_numeric_id_is_404() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/albums/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Album not found");
    }

    #[tokio::test]
    async fn create_returns_201_with_next_id() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/albums",
                json!({
                    "title": "Test Album",
                    "artist": "Test Artist",
                    "price": 9.99,
                    "image_url": "https://example.com/image.jpg"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["title"], "Test Album");
        assert_eq!(body["artist"], "Test Artist");
        assert_eq!(body["price"], 9.99);
        assert_eq!(body["image_url"], "https://example.com/image.jpg");
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_400() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/albums",
                json!({ "title": "Test Album" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            crate::store::MISSING_FIELDS_MESSAGE
        );
    }

    #[tokio::test]
    async fn create_with_string_price_is_parsed() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/albums",
                json!({
                    "title": "Test Album",
                    "artist": "Test Artist",
                    "price": "8.50",
                    "image_url": "https://example.com/image.jpg"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["price"], 8.5);
    }

    #[tokio::test]
    async fn create_with_negative_price_is_400() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/albums",
                json!({
                    "title": "Test Album",
                    "artist": "Test Artist",
                    "price": -1,
                    "image_url": "https://example.com/image.jpg"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn create_with_malformed_json_is_400() {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/albums")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn update_applies_partial_fields() {
        let response = app()
            .oneshot(json_request(
                Method::PUT,
                "/albums/1",
                json!({ "title": "Updated Title", "price": 15.99 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "Updated Title");
        assert_eq!(body["price"], 15.99);
        assert_eq!(body["artist"], "Daprize");
        assert_eq!(body["image_url"], "https://aka.ms/albums-daprlogo");
    }

    #[tokio::test]
    async fn update_missing_is_404() {
        let response = app()
            .oneshot(json_request(
                Method::PUT,
                "/albums/999",
                json!({ "title": "Updated" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Album not found");
    }

    #[tokio::test]
    async fn update_missing_with_malformed_json_is_404() {
        let request = axum::http::Request::builder()
            .method(Method::PUT)
            .uri("/albums/999")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Album not found");
    }

    #[tokio::test]
    async fn update_existing_with_malformed_json_is_400() {
        let request = axum::http::Request::builder()
            .method(Method::PUT)
            .uri("/albums/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn create_after_largest_id_is_conflict() {
        let mut top = default_seed().remove(0);
        top.id = AlbumId::MAX;
        let app = create_router(SharedAlbumStore::new(AlbumStore::new(
            vec![top],
            IdStrategy::MaxPlusOne,
        )));

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/albums",
                json!({
                    "title": "Test Album",
                    "artist": "Test Artist",
                    "price": 9.99,
                    "image_url": "https://example.com/image.jpg"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn delete_returns_removed_album() {
        let response = app()
            .oneshot(empty_request(Method::DELETE, "/albums/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], 1);
    }

    #[tokio::test]
    async fn delete_missing_is_404() {
        let response = app()
            .oneshot(empty_request(Method::DELETE, "/albums/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Album not found");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = axum::http::Request::builder()
            .method(Method::GET)
            .uri("/albums")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
