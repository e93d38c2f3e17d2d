use serde::{Deserialize, Serialize};
use thiserror::Error;

use printerp_core::{DomainError, DomainResult, Entity, MaterialId, StockRecordId};

/// A trackable stock item (paper type, vinyl, laminate, ...).
///
/// Owned by the upstream catalog; immutable from this system's perspective.
/// Field names follow the upstream API schema on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "materiau_id")]
    pub id: MaterialId,

    /// Optional display name; blank or missing falls back to the type label.
    #[serde(rename = "nom", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type_materiau")]
    pub material_type: String,

    /// Unit of measure shared by all of this material's stock records.
    #[serde(rename = "unite_mesure")]
    pub unit: String,

    #[serde(rename = "prix_unitaire")]
    pub unit_price: f64,
}

impl Material {
    /// User-facing name: `nom` when present and non-blank, else the type label.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.material_type,
        }
    }

    /// Validate catalog-level invariants on the material itself.
    pub fn validate(&self) -> DomainResult<()> {
        if self.material_type.trim().is_empty() {
            return Err(DomainError::validation("type_materiau cannot be empty"));
        }
        if !(self.unit_price.is_finite() && self.unit_price >= 0.0) {
            return Err(DomainError::validation(format!(
                "prix_unitaire must be finite and >= 0 (got {})",
                self.unit_price
            )));
        }
        Ok(())
    }
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One stocked lot/width variant of a material.
///
/// Quantities and thresholds are expressed in the material's unit of measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(rename = "stock_id")]
    pub id: StockRecordId,

    #[serde(rename = "materiau_id")]
    pub material_id: MaterialId,

    /// Physical width class of the lot (e.g. roll width in cm).
    #[serde(rename = "largeur")]
    pub width: f64,

    #[serde(rename = "quantite_en_stock")]
    pub quantity_in_stock: f64,

    #[serde(rename = "seuil_alerte")]
    pub alert_threshold: f64,

    #[serde(rename = "unite_mesure")]
    pub unit: String,
}

impl Entity for StockRecord {
    type Id = StockRecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A malformed stock record, rejected at ingestion.
///
/// Negative or non-finite numeric fields are never silently coerced; a record
/// that fails here fails the whole evaluation it arrived in.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidStockRecord {
    #[error("stock record {stock_id}: quantity in stock must be finite and >= 0 (got {value})")]
    Quantity { stock_id: StockRecordId, value: f64 },

    #[error("stock record {stock_id}: alert threshold must be finite and >= 0 (got {value})")]
    Threshold { stock_id: StockRecordId, value: f64 },

    #[error("stock record {stock_id}: width must be finite and >= 0 (got {value})")]
    Width { stock_id: StockRecordId, value: f64 },

    #[error(
        "stock record {stock_id}: belongs to material {found}, expected material {expected}"
    )]
    MaterialMismatch {
        stock_id: StockRecordId,
        expected: MaterialId,
        found: MaterialId,
    },
}

impl StockRecord {
    /// Validate the invariants the aggregation core relies on.
    pub fn validate(&self) -> Result<(), InvalidStockRecord> {
        if !(self.quantity_in_stock.is_finite() && self.quantity_in_stock >= 0.0) {
            return Err(InvalidStockRecord::Quantity {
                stock_id: self.id,
                value: self.quantity_in_stock,
            });
        }
        if !(self.alert_threshold.is_finite() && self.alert_threshold >= 0.0) {
            return Err(InvalidStockRecord::Threshold {
                stock_id: self.id,
                value: self.alert_threshold,
            });
        }
        if !(self.width.is_finite() && self.width >= 0.0) {
            return Err(InvalidStockRecord::Width {
                stock_id: self.id,
                value: self.width,
            });
        }
        Ok(())
    }
}

/// One catalog row: a material with all of its stock records.
///
/// This is the unit the provider port returns (spec'd by the upstream
/// `low stock` endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialStocks {
    pub material: Material,
    pub stocks: Vec<StockRecord>,
}

impl MaterialStocks {
    /// Validate every record and its ownership link to this material.
    pub fn validate(&self) -> Result<(), InvalidStockRecord> {
        for stock in &self.stocks {
            stock.validate()?;
            if stock.material_id != self.material.id {
                return Err(InvalidStockRecord::MaterialMismatch {
                    stock_id: stock.id,
                    expected: self.material.id,
                    found: stock.material_id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: i64) -> Material {
        Material {
            id: MaterialId::new(id),
            name: Some("Papier photo brillant".to_string()),
            material_type: "papier_photo".to_string(),
            unit: "m²".to_string(),
            unit_price: 4.5,
        }
    }

    fn record(id: i64, material_id: i64, qty: f64, threshold: f64) -> StockRecord {
        StockRecord {
            id: StockRecordId::new(id),
            material_id: MaterialId::new(material_id),
            width: 106.7,
            quantity_in_stock: qty,
            alert_threshold: threshold,
            unit: "m²".to_string(),
        }
    }

    #[test]
    fn deserializes_upstream_wire_shape() {
        // Shape as returned by the upstream inventory REST API.
        let body = r#"{
            "material": {
                "materiau_id": 3,
                "nom": "Bâche 510g",
                "type_materiau": "bache",
                "unite_mesure": "m²",
                "prix_unitaire": 7.9
            },
            "stocks": [
                {
                    "stock_id": 11,
                    "materiau_id": 3,
                    "largeur": 160.0,
                    "quantite_en_stock": 42.5,
                    "seuil_alerte": 20.0,
                    "unite_mesure": "m²"
                }
            ]
        }"#;

        let entry: MaterialStocks = serde_json::from_str(body).unwrap();
        assert_eq!(entry.material.id, MaterialId::new(3));
        assert_eq!(entry.material.display_name(), "Bâche 510g");
        assert_eq!(entry.stocks.len(), 1);
        assert_eq!(entry.stocks[0].quantity_in_stock, 42.5);
        assert_eq!(entry.stocks[0].alert_threshold, 20.0);
        entry.validate().unwrap();
    }

    #[test]
    fn missing_name_is_accepted_and_falls_back_to_type() {
        let body = r#"{
            "materiau_id": 7,
            "type_materiau": "vinyle",
            "unite_mesure": "m²",
            "prix_unitaire": 5.0
        }"#;

        let m: Material = serde_json::from_str(body).unwrap();
        assert_eq!(m.name, None);
        assert_eq!(m.display_name(), "vinyle");
    }

    #[test]
    fn blank_name_falls_back_to_type_label() {
        let mut m = material(1);
        m.name = Some("   ".to_string());
        assert_eq!(m.display_name(), "papier_photo");
    }

    #[test]
    fn validate_rejects_negative_quantity() {
        let r = record(1, 1, -3.0, 10.0);
        match r.validate().unwrap_err() {
            InvalidStockRecord::Quantity { stock_id, value } => {
                assert_eq!(stock_id, StockRecordId::new(1));
                assert_eq!(value, -3.0);
            }
            other => panic!("Expected Quantity error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let r = record(2, 1, 3.0, -0.5);
        match r.validate().unwrap_err() {
            InvalidStockRecord::Threshold { .. } => {}
            other => panic!("Expected Threshold error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_non_finite_quantity() {
        let r = record(3, 1, f64::NAN, 10.0);
        match r.validate().unwrap_err() {
            InvalidStockRecord::Quantity { .. } => {}
            other => panic!("Expected Quantity error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_foreign_material_record() {
        let entry = MaterialStocks {
            material: material(1),
            stocks: vec![record(5, 2, 3.0, 10.0)],
        };
        match entry.validate().unwrap_err() {
            InvalidStockRecord::MaterialMismatch { expected, found, .. } => {
                assert_eq!(expected, MaterialId::new(1));
                assert_eq!(found, MaterialId::new(2));
            }
            other => panic!("Expected MaterialMismatch error, got {other:?}"),
        }
    }

    #[test]
    fn zero_quantity_and_zero_threshold_are_valid() {
        let r = record(4, 1, 0.0, 0.0);
        r.validate().unwrap();
    }

    #[test]
    fn material_with_negative_price_is_rejected() {
        let mut m = material(1);
        m.unit_price = -1.0;
        match m.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("prix_unitaire")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn material_with_blank_type_is_rejected() {
        let mut m = material(1);
        m.material_type = "  ".to_string();
        assert!(m.validate().is_err());
    }
}
