//! Cart resource and its JSON envelopes.
//!
//! Shopify wraps every REST payload under a key named after the resource:
//! a single cart travels as `{"cart": {...}}`, a listing as
//! `{"carts": [...]}`, and the tag listing as `{"tags": [...]}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::CartId;

/// A Shopify cart snapshot.
///
/// Every field is optional and independent: the struct carries no derived
/// values and enforces no relationships between fields. Unset fields are
/// left out of the encoded JSON, so a partially populated cart can be sent
/// to `create`/`update` and only the populated fields reach the server.
///
/// # Example
///
/// ```
/// use shopify_rest_core::{Cart, CartId};
///
/// let cart = Cart {
///     id: Some(CartId::new(42)),
///     notes: Some("gift wrap".to_string()),
///     ..Cart::default()
/// };
/// assert_eq!(cart.item_count, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart ID (assigned by Shopify on create).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CartId>,
    /// Storefront session token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Liquid money format, e.g. `"${{amount}}"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Total weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes_tax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_is_taxed: Option<bool>,
    /// Cart ID on the originating sales channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_cart_id: Option<String>,
    /// Kind of the originating sales channel cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_cart_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<i64>,
    /// Token exposed to the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_token: Option<String>,
    /// Free-form cart attributes, as the raw string Shopify stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Single-cart envelope: `{"cart": {...}}`.
///
/// Used as the request body for create/update and as the response body for
/// get/create/update. A response without the `cart` key fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartResource {
    pub cart: Cart,
}

/// Cart listing envelope: `{"carts": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartsResource {
    #[serde(default)]
    pub carts: Vec<Cart>,
}

/// Cart tag listing envelope: `{"tags": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTagsResource {
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn full_cart() -> Cart {
        Cart {
            id: Some(CartId::new(1_234_567)),
            session_token: Some("sess_abc".to_string()),
            identifier: Some("ident".to_string()),
            currency_template: Some("${{amount}}".to_string()),
            notes: Some("leave at the door".to_string()),
            total_weight: Some(1500),
            item_count: Some(3),
            requires_shipping: Some(true),
            cart_completed: Some(false),
            includes_tax: Some(true),
            shipping_is_taxed: Some(false),
            native_cart_id: Some("native-1".to_string()),
            native_cart_type: Some("pos".to_string()),
            shop_id: Some(99),
            public_token: Some("pub_xyz".to_string()),
            attributes: Some("{\"color\":\"red\"}".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap()),
        }
    }

    #[test]
    fn test_empty_cart_serializes_to_empty_object() {
        let json = serde_json::to_value(Cart::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_only_set_fields_are_serialized() {
        let cart = Cart {
            id: Some(CartId::new(42)),
            requires_shipping: Some(false),
            ..Cart::default()
        };
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json, json!({"id": 42, "requires_shipping": false}));
    }

    #[test]
    fn test_envelope_roundtrip_preserves_set_fields() {
        let resource = CartResource { cart: full_cart() };
        let encoded = serde_json::to_string(&resource).unwrap();
        let decoded: CartResource = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, resource);
    }

    #[test]
    fn test_envelope_roundtrip_keeps_unset_fields_absent() {
        let resource = CartResource {
            cart: Cart {
                notes: Some("only notes".to_string()),
                ..Cart::default()
            },
        };
        let encoded = serde_json::to_value(&resource).unwrap();
        assert_eq!(encoded, json!({"cart": {"notes": "only notes"}}));

        let decoded: CartResource = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded.cart.notes.as_deref(), Some("only notes"));
        assert_eq!(decoded.cart.id, None);
        assert_eq!(decoded.cart.created_at, None);
    }

    #[test]
    fn test_decodes_shopify_response_with_offsets_and_unknown_keys() {
        let body = json!({
            "cart": {
                "id": 7,
                "item_count": 2,
                "created_at": "2024-03-01T10:00:00-05:00",
                "line_items": [{"id": 1}]
            }
        });
        let decoded: CartResource = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.cart.id, Some(CartId::new(7)));
        assert_eq!(decoded.cart.item_count, Some(2));
        assert_eq!(
            decoded.cart.created_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_null_fields_decode_as_none() {
        let body = json!({"cart": {"id": 7, "notes": null, "updated_at": null}});
        let decoded: CartResource = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.cart.notes, None);
        assert_eq!(decoded.cart.updated_at, None);
    }

    #[test]
    fn test_missing_cart_key_fails_to_decode() {
        let result = serde_json::from_value::<CartResource>(json!({"carts": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_null_cart_fails_to_decode() {
        let result = serde_json::from_value::<CartResource>(json!({"cart": null}));
        assert!(result.is_err());
    }

    #[test]
    fn test_carts_envelope() {
        let body = json!({"carts": [{"id": 1}, {"id": 2, "notes": "b"}]});
        let decoded: CartsResource = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.carts.len(), 2);
        assert_eq!(decoded.carts.first().and_then(|c| c.id), Some(CartId::new(1)));
    }

    #[test]
    fn test_tags_envelope() {
        let decoded: CartTagsResource =
            serde_json::from_value(json!({"tags": ["vip", "wholesale"]})).unwrap();
        assert_eq!(decoded.tags, vec!["vip".to_string(), "wholesale".to_string()]);

        let empty: CartTagsResource = serde_json::from_value(json!({})).unwrap();
        assert!(empty.tags.is_empty());
    }
}
