//! Enumeraciones de estado
//!
//! Estados de cuenta, de conductor, de coche y de documento. Cada enumeración
//! tiene un nombre de miembro (el label del ENUM en PostgreSQL) y un valor
//! visible. La resolución de un string recibido por la API se hace primero por
//! nombre y después por valor sin distinguir mayúsculas.

use serde::{Deserialize, Serialize};
use sqlx::Type;

use crate::utils::errors::{invalid_input_error, AppResult};

/// Contrato común de las enumeraciones de estado
pub trait StatusEnum: Copy + Sized + 'static {
    /// Nombre legible de la enumeración para los mensajes de error
    const LABEL: &'static str;

    fn variants() -> &'static [Self];

    /// Nombre del miembro, igual al label del ENUM en la base de datos
    fn name(&self) -> &'static str;

    /// Valor visible
    fn value(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.name() == name)
    }

    /// Nombres y valores aceptados, en ese orden
    fn legal_values() -> Vec<String> {
        let variants = Self::variants();
        variants
            .iter()
            .map(|v| v.name().to_string())
            .chain(variants.iter().map(|v| v.value().to_string()))
            .collect()
    }

    /// Resolver un string recibido: nombre del miembro primero, valor después
    fn resolve(raw: &str) -> AppResult<Self> {
        if let Some(status) = Self::from_name(&raw.to_uppercase()) {
            return Ok(status);
        }

        let lowered = raw.to_lowercase();
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.value().to_lowercase() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::variants().iter().map(|v| v.name()).collect();
                let values: Vec<&str> = Self::variants().iter().map(|v| v.value()).collect();
                invalid_input_error(
                    format!(
                        "Invalid {} '{}'. Must be one of: {:?} or {:?}",
                        Self::LABEL,
                        raw,
                        names,
                        values
                    ),
                    Self::legal_values(),
                )
            })
    }
}

/// Estado de cuenta de vendors y vehicle owners - mapea al ENUM account_status_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "account_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
}

impl StatusEnum for AccountStatus {
    const LABEL: &'static str = "account status";

    fn variants() -> &'static [Self] {
        &[AccountStatus::Active, AccountStatus::Inactive, AccountStatus::Pending]
    }

    fn name(&self) -> &'static str {
        match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Inactive => "INACTIVE",
            AccountStatus::Pending => "PENDING",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Pending => "Pending",
        }
    }
}

/// Estado del conductor - mapea al ENUM driver_status_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "driver_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    Online,
    Offline,
    Driving,
    Blocked,
    Processing,
}

impl DriverStatus {
    /// Política de negocio: un conductor cuenta como activo si está en línea o conduciendo
    pub const ACTIVE_BUCKET: [DriverStatus; 2] = [DriverStatus::Online, DriverStatus::Driving];
    pub const INACTIVE_BUCKET: [DriverStatus; 3] = [
        DriverStatus::Offline,
        DriverStatus::Blocked,
        DriverStatus::Processing,
    ];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE_BUCKET.contains(self)
    }
}

impl StatusEnum for DriverStatus {
    const LABEL: &'static str = "driver status";

    fn variants() -> &'static [Self] {
        &[
            DriverStatus::Online,
            DriverStatus::Offline,
            DriverStatus::Driving,
            DriverStatus::Blocked,
            DriverStatus::Processing,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            DriverStatus::Online => "ONLINE",
            DriverStatus::Offline => "OFFLINE",
            DriverStatus::Driving => "DRIVING",
            DriverStatus::Blocked => "BLOCKED",
            DriverStatus::Processing => "PROCESSING",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            DriverStatus::Online => "Online",
            DriverStatus::Offline => "Offline",
            DriverStatus::Driving => "Driving",
            DriverStatus::Blocked => "Blocked",
            DriverStatus::Processing => "Processing",
        }
    }
}

/// Estado del coche - mapea al ENUM car_status_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "car_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarStatus {
    Online,
    Driving,
    Blocked,
    Processing,
}

impl StatusEnum for CarStatus {
    const LABEL: &'static str = "car status";

    fn variants() -> &'static [Self] {
        &[
            CarStatus::Online,
            CarStatus::Driving,
            CarStatus::Blocked,
            CarStatus::Processing,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            CarStatus::Online => "ONLINE",
            CarStatus::Driving => "DRIVING",
            CarStatus::Blocked => "BLOCKED",
            CarStatus::Processing => "PROCESSING",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            CarStatus::Online => "Online",
            CarStatus::Driving => "Driving",
            CarStatus::Blocked => "Blocked",
            CarStatus::Processing => "Processing",
        }
    }
}

/// Estado de verificación de un documento - mapea al ENUM document_status_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[sqlx(type_name = "document_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Verified,
    Invalid,
}

impl StatusEnum for DocumentStatus {
    const LABEL: &'static str = "document status";

    fn variants() -> &'static [Self] {
        &[
            DocumentStatus::Pending,
            DocumentStatus::Verified,
            DocumentStatus::Invalid,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "PENDING",
            DocumentStatus::Verified => "VERIFIED",
            DocumentStatus::Invalid => "INVALID",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Verified => "Verified",
            DocumentStatus::Invalid => "Invalid",
        }
    }
}

/// Estado de un pago Razorpay - mapea al ENUM razorpay_payment_status_enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "razorpay_payment_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RazorpayPaymentStatus {
    Created,
    Authorized,
    Captured,
    Failed,
    Refunded,
}

impl StatusEnum for RazorpayPaymentStatus {
    const LABEL: &'static str = "payment status";

    fn variants() -> &'static [Self] {
        &[
            RazorpayPaymentStatus::Created,
            RazorpayPaymentStatus::Authorized,
            RazorpayPaymentStatus::Captured,
            RazorpayPaymentStatus::Failed,
            RazorpayPaymentStatus::Refunded,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            RazorpayPaymentStatus::Created => "CREATED",
            RazorpayPaymentStatus::Authorized => "AUTHORIZED",
            RazorpayPaymentStatus::Captured => "CAPTURED",
            RazorpayPaymentStatus::Failed => "FAILED",
            RazorpayPaymentStatus::Refunded => "REFUNDED",
        }
    }

    // Razorpay reporta los estados en minúsculas
    fn value(&self) -> &'static str {
        match self {
            RazorpayPaymentStatus::Created => "created",
            RazorpayPaymentStatus::Authorized => "authorized",
            RazorpayPaymentStatus::Captured => "captured",
            RazorpayPaymentStatus::Failed => "failed",
            RazorpayPaymentStatus::Refunded => "refunded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_resolve_by_name_any_case() {
        assert_eq!(DriverStatus::resolve("online").unwrap(), DriverStatus::Online);
        assert_eq!(DriverStatus::resolve("ONLINE").unwrap(), DriverStatus::Online);
        assert_eq!(AccountStatus::resolve("pEnDiNg").unwrap(), AccountStatus::Pending);
        assert_eq!(CarStatus::resolve("blocked").unwrap(), CarStatus::Blocked);
    }

    #[test]
    fn test_resolve_by_display_value() {
        assert_eq!(DocumentStatus::resolve("Verified").unwrap(), DocumentStatus::Verified);
        assert_eq!(AccountStatus::resolve("inactive").unwrap(), AccountStatus::Inactive);
    }

    #[test]
    fn test_resolve_rejects_unknown_and_lists_legal_values() {
        match DriverStatus::resolve("flying") {
            Err(AppError::InvalidInput { message, allowed_values }) => {
                assert!(message.contains("flying"));
                assert!(allowed_values.contains(&"ONLINE".to_string()));
                assert!(allowed_values.contains(&"Processing".to_string()));
                assert_eq!(allowed_values.len(), 10);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_driver_buckets_cover_every_status_once() {
        for status in DriverStatus::variants() {
            let in_active = DriverStatus::ACTIVE_BUCKET.contains(status);
            let in_inactive = DriverStatus::INACTIVE_BUCKET.contains(status);
            assert!(in_active ^ in_inactive, "{:?} must be in exactly one bucket", status);
        }
    }

    #[test]
    fn test_payment_status_accepts_gateway_spelling() {
        assert_eq!(
            RazorpayPaymentStatus::resolve("captured").unwrap(),
            RazorpayPaymentStatus::Captured
        );
        assert_eq!(RazorpayPaymentStatus::resolve("FAILED").unwrap(), RazorpayPaymentStatus::Failed);
        assert!(RazorpayPaymentStatus::resolve("settled").is_err());
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(CarStatus::from_name("DRIVING"), Some(CarStatus::Driving));
        assert_eq!(CarStatus::from_name("driving"), None);
        assert_eq!(CarStatus::from_name("OFFLINE"), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_case(input: &'static str) -> impl Strategy<Value = String> {
            proptest::collection::vec(any::<bool>(), input.len()).prop_map(move |flags| {
                input
                    .chars()
                    .zip(flags)
                    .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                    .collect()
            })
        }

        proptest! {
            /// Cualquier combinación de mayúsculas de un nombre o valor resuelve al mismo miembro
            #[test]
            fn prop_document_status_case_insensitive(idx in 0usize..3, use_value in any::<bool>(), seed in any::<u64>()) {
                let status = DocumentStatus::variants()[idx];
                let text = if use_value { status.value() } else { status.name() };
                let mixed: String = text
                    .chars()
                    .enumerate()
                    .map(|(i, c)| if (seed >> (i % 64)) & 1 == 1 { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                    .collect();
                prop_assert_eq!(DocumentStatus::resolve(&mixed).unwrap(), status);
            }

            #[test]
            fn prop_driver_status_mixed_case(raw in arb_case("processing")) {
                prop_assert_eq!(DriverStatus::resolve(&raw).unwrap(), DriverStatus::Processing);
            }

            /// Strings alfabéticos que no son miembros siempre se rechazan
            #[test]
            fn prop_unknown_tokens_rejected(raw in "[a-z]{1,12}") {
                let known = AccountStatus::legal_values()
                    .iter()
                    .any(|v| v.to_lowercase() == raw);
                prop_assume!(!known);
                prop_assert!(AccountStatus::resolve(&raw).is_err());
            }
        }
    }
}
