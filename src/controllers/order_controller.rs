use std::sync::Arc;

use crate::dto::order_dto::{CancelOrderForm, CancelOrderResponse, OrderListQuery};
use crate::models::order::{OrderFilter, OrderRecord, OrderSource};
use crate::repositories::OrderRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{parse_iso_datetime, parse_uuid, present};

/// Convertir la query HTTP en un filtro validado
pub fn build_order_filter(query: &OrderListQuery) -> AppResult<OrderFilter> {
    Ok(OrderFilter {
        vendor_id: present(query.vendor_id.as_deref())
            .map(|raw| parse_uuid("vendor_id", raw))
            .transpose()?,
        trip_status: present(query.trip_status.as_deref()).map(str::to_string),
        source: present(query.source.as_deref())
            .map(str::parse::<OrderSource>)
            .transpose()?,
        start_date: present(query.start_date.as_deref())
            .map(|raw| parse_iso_datetime("start_date", raw))
            .transpose()?,
        end_date: present(query.end_date.as_deref())
            .map(|raw| parse_iso_datetime("end_date", raw))
            .transpose()?,
    })
}

pub struct OrderController {
    orders: Arc<dyn OrderRepository>,
}

impl OrderController {
    pub fn new(state: &AppState) -> Self {
        Self {
            orders: state.orders.clone(),
        }
    }

    pub async fn list_orders(&self, query: &OrderListQuery) -> AppResult<Vec<OrderRecord>> {
        let filter = build_order_filter(query)?;
        let orders = self.orders.list_orders(&filter).await?;
        tracing::debug!("📋 {} órdenes encontradas", orders.len());
        Ok(orders)
    }

    pub async fn cancel_order(&self, id: i64, form: CancelOrderForm) -> AppResult<CancelOrderResponse> {
        let order = self
            .orders
            .cancel_order(id)
            .await?
            .ok_or_else(|| not_found_error("Order", &id.to_string()))?;

        tracing::info!(
            "🛑 Orden {} cancelada por admin (motivo: {})",
            order.id,
            form.reason.as_deref().unwrap_or("-")
        );

        Ok(CancelOrderResponse {
            order_id: order.id,
            trip_status: order.trip_status,
            cancelled_by: order.cancelled_by,
            reason: form.reason,
        })
    }
}
