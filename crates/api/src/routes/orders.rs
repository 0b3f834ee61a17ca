//! Order create, update and lookup endpoints.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{CustomerId, DiscountCode, OrderId, ProductId, StoreId};
use domain::{CreateOrderRequest, ModifyOrderRequest, Order, OrderService, ProductRequestItem};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub order_service: OrderService,
}

// -- Request types --

/// Fields shared by create and update bodies.
#[derive(Deserialize)]
pub struct OrderBody {
    pub store_id: String,
    pub customer_id: String,
    pub discount_code: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductItemBody>,
}

#[derive(Deserialize)]
pub struct CreateOrderBody {
    /// Client-chosen order ID; generated when absent.
    pub id: Option<String>,
    #[serde(flatten)]
    pub order: OrderBody,
}

#[derive(Deserialize)]
pub struct ProductItemBody {
    pub id: String,
    pub quantity: u32,
}

/// Order fields with IDs parsed.
struct ParsedOrder {
    store_id: StoreId,
    customer_id: CustomerId,
    discount_code: Option<DiscountCode>,
    products: Vec<ProductRequestItem>,
}

impl OrderBody {
    fn parse(self) -> Result<ParsedOrder, ApiError> {
        let products = self
            .products
            .iter()
            .map(|item| -> Result<ProductRequestItem, ApiError> {
                Ok(ProductRequestItem::new(
                    parse_id::<ProductId>("product id", &item.id)?,
                    item.quantity,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedOrder {
            store_id: parse_id("store_id", &self.store_id)?,
            customer_id: parse_id("customer_id", &self.customer_id)?,
            discount_code: self.discount_code.map(DiscountCode::from),
            products,
        })
    }
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub store_id: String,
    pub customer_id: String,
    pub discount_code: Option<String>,
    pub products: Vec<OrderLineResponse>,
    pub total_cents: i64,
}

#[derive(Serialize)]
pub struct OrderLineResponse {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            store_id: order.store.id.to_string(),
            customer_id: order.customer.id.to_string(),
            discount_code: order.discount.as_ref().map(|d| d.code.to_string()),
            products: order
                .lines
                .iter()
                .map(|line| OrderLineResponse {
                    product_id: line.product.id.to_string(),
                    quantity: line.quantity,
                    unit_price_cents: line.product.price.cents(),
                    line_total_cents: line.total_price().cents(),
                })
                .collect(),
            total_cents: order.total_amount().cents(),
        }
    }
}

// -- Handlers --

/// POST /orders — validate and create a new order.
#[tracing::instrument(skip(state, body))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateOrderBody>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let id = match body.id {
        Some(ref id) => parse_id("id", id)?,
        None => OrderId::new(),
    };
    let parsed = body.order.parse()?;

    let order = state
        .order_service
        .create_order(CreateOrderRequest {
            id,
            store_id: parsed.store_id,
            customer_id: parsed.customer_id,
            discount_code: parsed.discount_code,
            products: parsed.products,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(&order))))
}

/// PUT /orders/:id — validate and replace an existing order.
#[tracing::instrument(skip(state, body))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<OrderBody>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_id("id", &id)?;
    let parsed = body.parse()?;

    let order = state
        .order_service
        .update_order(ModifyOrderRequest {
            id,
            store_id: parsed.store_id,
            customer_id: parsed.customer_id,
            discount_code: parsed.discount_code,
            products: parsed.products,
        })
        .await?;

    Ok(Json(OrderResponse::from(&order)))
}

/// GET /orders/:id — load an order by ID.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id: OrderId = parse_id("id", &id)?;
    let order = state
        .order_service
        .get_order(order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    Ok(Json(OrderResponse::from(&order)))
}

fn parse_id<T>(field: &str, value: &str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid {field} '{value}': {e}")))
}
