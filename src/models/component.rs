//! Component model and the per-type specifications union

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::ComponentType;

/// Typed specification sets for the known component types, with an ordered
/// free-form map as the escape hatch for everything else. Stored as JSONB
/// with an internal "type" tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum Specifications {
    Processor {
        cores: Option<i32>,
        threads: Option<i32>,
        base_clock_ghz: Option<f64>,
        socket: Option<String>,
    },
    Motherboard {
        chipset: Option<String>,
        form_factor: Option<String>,
        socket: Option<String>,
        memory_slots: Option<i32>,
    },
    Ram {
        capacity_gb: Option<i32>,
        memory_type: Option<String>,
        speed_mhz: Option<i32>,
    },
    Storage {
        capacity_gb: Option<i32>,
        storage_type: Option<String>,
        interface: Option<String>,
    },
    #[schema(value_type = Object)]
    Custom(IndexMap<String, String>),
}

impl Specifications {
    /// Empty specification set matching a component type
    pub fn empty_for(component_type: ComponentType) -> Self {
        match component_type {
            ComponentType::Processor => Specifications::Processor {
                cores: None,
                threads: None,
                base_clock_ghz: None,
                socket: None,
            },
            ComponentType::Motherboard => Specifications::Motherboard {
                chipset: None,
                form_factor: None,
                socket: None,
                memory_slots: None,
            },
            ComponentType::Ram => Specifications::Ram {
                capacity_gb: None,
                memory_type: None,
                speed_mhz: None,
            },
            ComponentType::Storage => Specifications::Storage {
                capacity_gb: None,
                storage_type: None,
                interface: None,
            },
            _ => Specifications::Custom(IndexMap::new()),
        }
    }
}

impl Default for Specifications {
    fn default() -> Self {
        Specifications::Custom(IndexMap::new())
    }
}

/// Component record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: Uuid,
    pub name: String,
    /// Raw taxonomy string; unrecognized values are preserved as-is
    #[serde(rename = "type")]
    pub component_type: String,
    pub subtype: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    #[schema(value_type = Specifications)]
    pub specifications: Json<Specifications>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create component request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponent {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub component_type: String,
    pub subtype: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// When absent, an empty variant matching the component type is stored
    pub specifications: Option<Specifications>,
}

/// Update component request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponent {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    pub subtype: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub specifications: Option<Specifications>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifications_tagging() {
        let spec = Specifications::Ram {
            capacity_gb: Some(16),
            memory_type: Some("DDR4".to_string()),
            speed_mhz: Some(3200),
        };
        let v = serde_json::to_value(&spec).unwrap();
        assert_eq!(v["type"], "Ram");
        assert_eq!(v["capacity_gb"], 16);

        let back: Specifications = serde_json::from_value(v).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_custom_specifications_preserve_order() {
        let mut map = IndexMap::new();
        map.insert("resolution".to_string(), "2560x1440".to_string());
        map.insert("panel".to_string(), "IPS".to_string());
        let spec = Specifications::Custom(map);

        let v = serde_json::to_value(&spec).unwrap();
        let back: Specifications = serde_json::from_value(v).unwrap();
        match back {
            Specifications::Custom(m) => {
                let keys: Vec<_> = m.keys().cloned().collect();
                assert_eq!(keys, vec!["resolution", "panel"]);
            }
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_for_unknown_type_is_custom() {
        let spec = Specifications::empty_for(ComponentType::Other);
        assert_eq!(spec, Specifications::Custom(IndexMap::new()));
    }
}
