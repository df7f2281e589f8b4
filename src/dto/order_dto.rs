use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub vendor_id: Option<String>,
    pub trip_status: Option<String>,
    pub source: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CancelOrderForm {
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CancelOrderResponse {
    pub order_id: i64,
    pub trip_status: String,
    pub cancelled_by: Option<String>,
    pub reason: Option<String>,
}
