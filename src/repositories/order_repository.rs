use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::order::{OrderFilter, OrderRecord, CANCELLED_BY_ADMIN, TRIP_STATUS_CANCELLED};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Órdenes que cumplen el filtro, las más recientes primero
    async fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<OrderRecord>>;

    /// Marca la orden como cancelada por un admin. None si no existe
    async fn cancel_order(&self, id: i64) -> AppResult<Option<OrderRecord>>;
}

const ORDER_COLUMNS: &str = r#"
    id, source, source_order_id, vendor_id, trip_type, car_type, pickup_drop_location,
    start_date_time, customer_name, customer_number, cost_per_km, extra_cost_per_km,
    driver_allowance, extra_driver_allowance, permit_charges, extra_permit_charges,
    hill_charges, toll_charges, pickup_notes, trip_status, pick_near_city, trip_distance,
    trip_time, platform_fees_percent, estimated_price, vendor_price, cancelled_by, created_at
"#;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<OrderRecord>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM orders
            WHERE ($1::uuid IS NULL OR vendor_id = $1)
              AND ($2::text IS NULL OR trip_status = $2)
              AND ($3::order_source_enum IS NULL OR source = $3)
              AND ($4::timestamptz IS NULL OR created_at >= $4)
              AND ($5::timestamptz IS NULL OR created_at <= $5)
            ORDER BY created_at DESC, id DESC
            "#,
            ORDER_COLUMNS
        );

        let orders = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(filter.vendor_id)
            .bind(filter.trip_status.as_deref())
            .bind(filter.source)
            .bind(filter.start_date)
            .bind(filter.end_date)
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    async fn cancel_order(&self, id: i64) -> AppResult<Option<OrderRecord>> {
        let sql = format!(
            "UPDATE orders SET trip_status = $2, cancelled_by = $3 WHERE id = $1 RETURNING {}",
            ORDER_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let order = sqlx::query_as::<_, OrderRecord>(&sql)
            .bind(id)
            .bind(TRIP_STATUS_CANCELLED)
            .bind(CANCELLED_BY_ADMIN)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(order)
    }
}
