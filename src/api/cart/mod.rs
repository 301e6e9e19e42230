//! Shopping cart API endpoints
//!
//! All routes require a valid JWT. The cart travels on the wire as a bare
//! JSON array of items, matching what clients render directly.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::cart::{Cart, CartItem};
use crate::infrastructure::cart::AddItemRequest;

/// Create the cart router
pub fn create_cart_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart))
        .route("/add", post(add_to_cart))
        .route("/checkout", post(checkout))
}

fn default_quantity() -> u32 {
    1
}

/// Add-to-cart request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Checkout response with the order snapshot
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: String,
    pub order: Vec<CartItem>,
}

/// Get the authenticated user's cart
///
/// GET /api/cart
pub async fn get_cart(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Cart>, ApiError> {
    let cart = state.cart_service.get_cart(user.id()).await?;

    Ok(Json(cart))
}

/// Add an item to the authenticated user's cart
///
/// POST /api/cart/add
///
/// If the product is already in the cart its quantity is increased and the
/// stored name/price are kept. Returns the updated cart.
pub async fn add_to_cart(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<Cart>, ApiError> {
    let cart = state
        .cart_service
        .add_to_cart(
            user.id(),
            AddItemRequest {
                product_id: body.product_id,
                name: body.name,
                price: body.price,
                quantity: body.quantity,
            },
        )
        .await?;

    Ok(Json(cart))
}

/// Checkout: snapshot the cart as an order and clear it
///
/// POST /api/cart/checkout
///
/// Checkout on an empty cart succeeds with an empty order. The order is
/// returned to the caller and not persisted anywhere.
pub async fn checkout(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let order = state.cart_service.checkout(user.id()).await?;

    Ok(Json(CheckoutResponse {
        message: "Order placed successfully".to_string(),
        order: order.items,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::api::test_support::{authed_state, TestContext};

    fn app(ctx: &TestContext) -> Router {
        Router::new()
            .nest("/api/cart", create_cart_router())
            .with_state(ctx.state.clone())
    }

    fn bearer(ctx: &TestContext) -> String {
        format!("Bearer {}", ctx.token)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_cart_requires_auth() {
        let ctx = authed_state().await;

        let response = app(&ctx)
            .oneshot(
                Request::builder()
                    .uri("/api/cart")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_empty_cart() {
        let ctx = authed_state().await;

        let response = app(&ctx)
            .oneshot(
                Request::builder()
                    .uri("/api/cart")
                    .header(header::AUTHORIZATION, bearer(&ctx))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_add_merges_and_keeps_first_price() {
        let ctx = authed_state().await;
        let router = app(&ctx);

        let first = Request::builder()
            .method("POST")
            .uri("/api/cart/add")
            .header(header::AUTHORIZATION, bearer(&ctx))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"productId":"p1","name":"Shirt","price":500,"quantity":1}"#,
            ))
            .unwrap();
        let response = router.clone().oneshot(first).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let second = Request::builder()
            .method("POST")
            .uri("/api/cart/add")
            .header(header::AUTHORIZATION, bearer(&ctx))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"productId":"p1","name":"Shirt","price":450,"quantity":2}"#,
            ))
            .unwrap();
        let response = router.oneshot(second).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!([
                {"productId": "p1", "name": "Shirt", "price": 500.0, "quantity": 3}
            ])
        );
    }

    #[tokio::test]
    async fn test_add_defaults_quantity_to_one() {
        let ctx = authed_state().await;

        let response = app(&ctx)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cart/add")
                    .header(header::AUTHORIZATION, bearer(&ctx))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"productId":"p2","name":"Hat","price":120}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[0]["quantity"], 1);
    }

    #[tokio::test]
    async fn test_add_with_missing_field_is_bad_request() {
        let ctx = authed_state().await;

        let response = app(&ctx)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cart/add")
                    .header(header::AUTHORIZATION, bearer(&ctx))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"productId":"p1","name":"Shirt"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_add_rejects_zero_quantity() {
        let ctx = authed_state().await;

        let response = app(&ctx)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cart/add")
                    .header(header::AUTHORIZATION, bearer(&ctx))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"productId":"p1","name":"Shirt","price":500,"quantity":0}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_checkout_returns_order_and_clears_cart() {
        let ctx = authed_state().await;
        let router = app(&ctx);

        let add = Request::builder()
            .method("POST")
            .uri("/api/cart/add")
            .header(header::AUTHORIZATION, bearer(&ctx))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"productId":"p1","name":"Shirt","price":500,"quantity":3}"#,
            ))
            .unwrap();
        router.clone().oneshot(add).await.unwrap();

        let checkout = Request::builder()
            .method("POST")
            .uri("/api/cart/checkout")
            .header(header::AUTHORIZATION, bearer(&ctx))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(checkout).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Order placed successfully");
        assert_eq!(body["order"][0]["quantity"], 3);

        let get = Request::builder()
            .uri("/api/cart")
            .header(header::AUTHORIZATION, bearer(&ctx))
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(get).await.unwrap();
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_succeeds() {
        let ctx = authed_state().await;

        let response = app(&ctx)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cart/checkout")
                    .header(header::AUTHORIZATION, bearer(&ctx))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["order"], serde_json::json!([]));
    }
}
