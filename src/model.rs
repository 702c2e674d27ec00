//! The goods row and its wire-facing shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A persisted goods row. `id` and `created_at` are storage-assigned and
/// never client-writable.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Goods {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Create payload. `name` is required; unknown fields are rejected rather
/// than dropped.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct GoodsCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Sparse update payload: only fields present in the request are applied.
/// An explicit `null` counts as absent.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct GoodsUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl GoodsUpdate {
    /// Merge the patch into `goods`, field by field. Returns the name and
    /// rendered value of every field that was applied, in declaration order.
    pub fn apply(self, goods: &mut Goods) -> Vec<(&'static str, String)> {
        let mut applied = Vec::new();
        if let Some(name) = self.name {
            applied.push(("name", name.clone()));
            goods.name = name;
        }
        if let Some(description) = self.description {
            applied.push(("description", description.clone()));
            goods.description = Some(description);
        }
        if let Some(price) = self.price {
            applied.push(("price", price.to_string()));
            goods.price = Some(price);
        }
        if let Some(quantity) = self.quantity {
            applied.push(("quantity", quantity.to_string()));
            goods.quantity = Some(quantity);
        }
        applied
    }
}

/// Pagination query for the list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Rows to skip from the start of the id order.
    #[serde(default)]
    pub skip: u32,
    /// Maximum rows to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Goods {
        Goods {
            id: 1,
            name: "Widget".into(),
            description: None,
            price: Some(9.99),
            quantity: Some(3),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_requires_name() {
        let err = serde_json::from_str::<GoodsCreate>(r#"{"price": 9.99}"#).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn create_rejects_unknown_fields() {
        let err =
            serde_json::from_str::<GoodsCreate>(r#"{"name": "Widget", "colour": "red"}"#)
                .unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn update_accepts_empty_patch() {
        let patch: GoodsUpdate = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none());
        assert!(patch.price.is_none());
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let err = serde_json::from_str::<GoodsUpdate>(r#"{"id": 7}"#).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut goods = widget();
        let patch: GoodsUpdate = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        let applied = patch.apply(&mut goods);
        assert_eq!(applied, vec![("price", "12.5".to_string())]);
        assert_eq!(goods.name, "Widget");
        assert_eq!(goods.price, Some(12.5));
        assert_eq!(goods.quantity, Some(3));
    }

    #[test]
    fn apply_with_empty_patch_changes_nothing() {
        let mut goods = widget();
        let before = goods.clone();
        let applied = GoodsUpdate::default().apply(&mut goods);
        assert!(applied.is_empty());
        assert_eq!(goods, before);
    }

    #[test]
    fn apply_reports_every_changed_field() {
        let mut goods = widget();
        let patch: GoodsUpdate =
            serde_json::from_str(r#"{"name": "Gadget", "quantity": 10}"#).unwrap();
        let applied = patch.apply(&mut goods);
        assert_eq!(
            applied,
            vec![
                ("name", "Gadget".to_string()),
                ("quantity", "10".to_string())
            ]
        );
        assert_eq!(goods.name, "Gadget");
        assert_eq!(goods.quantity, Some(10));
    }

    #[test]
    fn list_params_default_to_first_hundred() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 100);
    }
}
