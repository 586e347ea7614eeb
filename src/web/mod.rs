use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    config::Config,
    error::AppError,
    models::{
        booking::{Booking, NewBooking},
        hotel::{Hotel, NewHotel},
    },
    services::{
        bookings, catalog,
        content::{self, Faq, Page},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct HotelsResponse {
    pub hotels: Vec<Hotel>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub hotels: Vec<Hotel>,
}

#[derive(Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct FaqResponse {
    pub faqs: &'static [Faq],
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/hotels", get(list_hotels).post(create_hotel))
        .route("/api/hotels/:id", get(get_hotel).delete(delete_hotel))
        .route("/api/hotels/:id/bookings", get(get_hotel_bookings))
        .route("/api/search", get(search_hotels))
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/:id", get(get_booking))
        .route("/api/pages/about", get(about_page))
        .route("/api/pages/contact", get(contact_page))
        .route("/api/pages/faq", get(faq_page))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) {
    let bind_addr = state
        .config
        .http_bind_address
        .clone()
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind http listener on {}: {}", bind_addr, err));
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .expect("HTTP server crashed");
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
    );
}

async fn list_hotels(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HotelsResponse>>, AppError> {
    let hotels = catalog::list(&state.config)?;
    Ok(Json(ApiResponse {
        data: HotelsResponse { hotels },
    }))
}

async fn create_hotel(
    State(state): State<AppState>,
    Json(body): Json<NewHotel>,
) -> Result<(StatusCode, Json<ApiResponse<Hotel>>), AppError> {
    let hotel = catalog::create(&state.config, body)?;
    Ok((StatusCode::CREATED, Json(ApiResponse { data: hotel })))
}

async fn get_hotel(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
) -> Result<Json<ApiResponse<Hotel>>, AppError> {
    let hotel = catalog::get_by_id(&state.config, id)?;
    Ok(Json(ApiResponse { data: hotel }))
}

async fn delete_hotel(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
) -> Result<StatusCode, AppError> {
    catalog::remove(&state.config, id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_hotel_bookings(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
) -> Result<Json<ApiResponse<BookingsResponse>>, AppError> {
    let hotel_bookings = bookings::list_for_hotel(&state.config, id)?;
    Ok(Json(ApiResponse {
        data: BookingsResponse {
            bookings: hotel_bookings,
        },
    }))
}

async fn search_hotels(
    State(state): State<AppState>,
    axum::extract::Query(SearchParams { q }): axum::extract::Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResponse>>, AppError> {
    let query = q.unwrap_or_default();
    let hotels = catalog::search(&state.config, &query)?;
    Ok(Json(ApiResponse {
        data: SearchResponse { query, hotels },
    }))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<NewBooking>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), AppError> {
    let booking = bookings::create(&state.config, body)?;
    Ok((StatusCode::CREATED, Json(ApiResponse { data: booking })))
}

async fn get_booking(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let booking = bookings::get(&state.config, id)?;
    Ok(Json(ApiResponse { data: booking }))
}

async fn about_page() -> Json<ApiResponse<Page>> {
    Json(ApiResponse {
        data: content::about(),
    })
}

async fn contact_page() -> Json<ApiResponse<Page>> {
    Json(ApiResponse {
        data: content::contact(),
    })
}

async fn faq_page() -> Json<ApiResponse<FaqResponse>> {
    Json(ApiResponse {
        data: FaqResponse {
            faqs: content::faqs(),
        },
    })
}
