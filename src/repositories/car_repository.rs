use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::CarRecord;
use crate::models::document::CarDocumentSlot;
use crate::models::status::{CarStatus, DocumentStatus};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_car(&self, id: Uuid) -> AppResult<Option<CarRecord>>;

    /// Coches de un vehicle owner, en orden de alta
    async fn list_cars_by_owner(&self, vehicle_owner_id: Uuid) -> AppResult<Vec<CarRecord>>;

    async fn set_car_status(&self, id: Uuid, status: CarStatus) -> AppResult<bool>;

    async fn set_car_document_status(
        &self,
        id: Uuid,
        slot: CarDocumentSlot,
        status: DocumentStatus,
    ) -> AppResult<bool>;
}

const CAR_SELECT: &str = r#"
    SELECT id, vehicle_owner_id, car_name, car_type::text AS car_type, car_number,
           year_of_the_car, rc_front_img_url, rc_front_status, rc_back_img_url,
           rc_back_status, insurance_img_url, insurance_status, fc_img_url, fc_status,
           car_img_url, car_img_status, permit_img_url, permit_status, car_status,
           created_at
    FROM car_details
"#;

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn find_car(&self, id: Uuid) -> AppResult<Option<CarRecord>> {
        let car = sqlx::query_as::<_, CarRecord>(&format!("{} WHERE id = $1", CAR_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    async fn list_cars_by_owner(&self, vehicle_owner_id: Uuid) -> AppResult<Vec<CarRecord>> {
        let cars = sqlx::query_as::<_, CarRecord>(&format!(
            "{} WHERE vehicle_owner_id = $1 ORDER BY created_at, id",
            CAR_SELECT
        ))
        .bind(vehicle_owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    async fn set_car_status(&self, id: Uuid, status: CarStatus) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("UPDATE car_details SET car_status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_car_document_status(
        &self,
        id: Uuid,
        slot: CarDocumentSlot,
        status: DocumentStatus,
    ) -> AppResult<bool> {
        // La columna sale de un conjunto cerrado, nunca de la entrada del usuario
        let sql = format!(
            "UPDATE car_details SET {} = $2 WHERE id = $1",
            slot.status_column()
        );

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(status)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
