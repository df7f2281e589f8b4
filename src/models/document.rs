//! Modelo de documentos
//!
//! Slots de documentos de cuenta (Aadhar, licencia) y de coche, y el
//! identificador compuesto que se usa para enrutar actualizaciones de estado:
//!
//! - `account_<slot>` para el documento de la cuenta
//! - `car_<car_id>_<slot>` para los documentos de un coche
//!
//! El id del coche se toma de la segunda parte al separar por `_`, y el slot se
//! reconstruye uniendo el resto. Un id de coche con `_` rompería el parseo.

use std::fmt;
use std::str::FromStr;

use crate::utils::errors::{bad_request_error, invalid_input_error, AppError};

/// Documento a nivel de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountDocumentSlot {
    Aadhar,
    Licence,
}

impl AccountDocumentSlot {
    pub const ALL: [AccountDocumentSlot; 2] = [AccountDocumentSlot::Aadhar, AccountDocumentSlot::Licence];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountDocumentSlot::Aadhar => "aadhar",
            AccountDocumentSlot::Licence => "licence",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountDocumentSlot::Aadhar => "Aadhar Card",
            AccountDocumentSlot::Licence => "Driving License",
        }
    }

    pub fn document_id(&self) -> String {
        DocumentRef::Account(*self).to_string()
    }
}

impl FromStr for AccountDocumentSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| {
                invalid_input_error(
                    format!("Invalid account document type '{}'", s),
                    Self::ALL.iter().map(|slot| slot.as_str().to_string()).collect(),
                )
            })
    }
}

/// Slots de documentos de un coche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarDocumentSlot {
    RcFront,
    RcBack,
    Insurance,
    Fc,
    CarImg,
    Permit,
}

impl CarDocumentSlot {
    pub const ALL: [CarDocumentSlot; 6] = [
        CarDocumentSlot::RcFront,
        CarDocumentSlot::RcBack,
        CarDocumentSlot::Insurance,
        CarDocumentSlot::Fc,
        CarDocumentSlot::CarImg,
        CarDocumentSlot::Permit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarDocumentSlot::RcFront => "rc_front",
            CarDocumentSlot::RcBack => "rc_back",
            CarDocumentSlot::Insurance => "insurance",
            CarDocumentSlot::Fc => "fc",
            CarDocumentSlot::CarImg => "car_img",
            CarDocumentSlot::Permit => "permit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CarDocumentSlot::RcFront => "RC Front",
            CarDocumentSlot::RcBack => "RC Back",
            CarDocumentSlot::Insurance => "Insurance",
            CarDocumentSlot::Fc => "Fitness Certificate",
            CarDocumentSlot::CarImg => "Car Image",
            CarDocumentSlot::Permit => "Permit",
        }
    }

    /// Columna de estado en car_details
    pub fn status_column(&self) -> &'static str {
        match self {
            CarDocumentSlot::RcFront => "rc_front_status",
            CarDocumentSlot::RcBack => "rc_back_status",
            CarDocumentSlot::Insurance => "insurance_status",
            CarDocumentSlot::Fc => "fc_status",
            CarDocumentSlot::CarImg => "car_img_status",
            CarDocumentSlot::Permit => "permit_status",
        }
    }

    fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|slot| slot.as_str().to_string()).collect()
    }
}

impl FromStr for CarDocumentSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| {
                invalid_input_error(
                    format!("Invalid document type '{}'", s),
                    Self::allowed(),
                )
            })
    }
}

/// Identificador compuesto de documento ya parseado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    Account(AccountDocumentSlot),
    Car { car_id: String, slot: CarDocumentSlot },
}

impl DocumentRef {
    pub fn car(car_id: impl Into<String>, slot: CarDocumentSlot) -> Self {
        DocumentRef::Car {
            car_id: car_id.into(),
            slot,
        }
    }

    pub fn document_type(&self) -> &'static str {
        match self {
            DocumentRef::Account(slot) => slot.as_str(),
            DocumentRef::Car { slot, .. } => slot.as_str(),
        }
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRef::Account(slot) => write!(f, "account_{}", slot.as_str()),
            DocumentRef::Car { car_id, slot } => write!(f, "car_{}_{}", car_id, slot.as_str()),
        }
    }
}

impl FromStr for DocumentRef {
    type Err = AppError;

    fn from_str(document_id: &str) -> Result<Self, Self::Err> {
        if let Some(slot) = document_id.strip_prefix("account_") {
            return Ok(DocumentRef::Account(slot.parse()?));
        }

        if document_id.starts_with("car_") {
            let parts: Vec<&str> = document_id.split('_').collect();
            if parts.len() < 3 {
                return Err(bad_request_error(
                    "Invalid car document ID format. Expected: car_{car_id}_{doc_type}",
                ));
            }

            let car_id = parts[1];
            if car_id.is_empty() {
                return Err(bad_request_error("Car document ID is missing the car id"));
            }
            let slot: CarDocumentSlot = parts[2..].join("_").parse()?;

            return Ok(DocumentRef::car(car_id, slot));
        }

        Err(bad_request_error(
            "Invalid document ID format. Expected account_{doc_type} or car_{car_id}_{doc_type}",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_account_document_ids() {
        assert_eq!(AccountDocumentSlot::Aadhar.document_id(), "account_aadhar");
        assert_eq!(
            "account_licence".parse::<DocumentRef>().unwrap(),
            DocumentRef::Account(AccountDocumentSlot::Licence)
        );
    }

    #[test]
    fn test_car_document_with_underscored_slot() {
        let parsed: DocumentRef = "car_7b0c_car_img".parse().unwrap();
        assert_eq!(parsed, DocumentRef::car("7b0c", CarDocumentSlot::CarImg));
        assert_eq!(parsed.document_type(), "car_img");
    }

    #[test]
    fn test_malformed_ids_rejected() {
        assert!("car_123".parse::<DocumentRef>().is_err());
        assert!("car__rc_front".parse::<DocumentRef>().is_err());
        assert!("car_123_wheels".parse::<DocumentRef>().is_err());
        assert!("account_passport".parse::<DocumentRef>().is_err());
        assert!("passport".parse::<DocumentRef>().is_err());
        assert!("".parse::<DocumentRef>().is_err());
    }

    #[test]
    fn test_underscored_car_id_is_misrouted() {
        // car id "12_rc" se corta en "12" y el slot queda "rc_rc_front"
        assert!("car_12_rc_rc_front".parse::<DocumentRef>().is_err());
    }

    #[test]
    fn test_status_columns_are_distinct() {
        let mut columns: Vec<&str> = CarDocumentSlot::ALL.iter().map(|s| s.status_column()).collect();
        columns.sort();
        columns.dedup();
        assert_eq!(columns.len(), CarDocumentSlot::ALL.len());
    }

    proptest! {
        #[test]
        fn prop_car_document_id_round_trip(car_id in "[A-Za-z0-9-]{1,36}", idx in 0usize..6) {
            let slot = CarDocumentSlot::ALL[idx];
            let composed = DocumentRef::car(car_id.clone(), slot).to_string();
            let parsed: DocumentRef = composed.parse().unwrap();
            prop_assert_eq!(parsed, DocumentRef::car(car_id, slot));
        }
    }
}
