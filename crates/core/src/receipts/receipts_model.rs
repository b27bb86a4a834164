//! Receipts domain models.

use serde::{Deserialize, Deserializer, Serialize};

/// A submitted purchase receipt.
///
/// Amounts, the purchase date and the purchase time are kept exactly as
/// submitted. They are only interpreted by the points engine, which treats
/// anything it cannot parse as a zero value.
///
/// Every field is optional on the wire: absent fields and JSON `null`
/// decode to the empty value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default, deserialize_with = "null_as_default")]
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_date: String,
    /// Time of day, 24-hour `HH:MM`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    /// Decimal amount rendered as a string, e.g. `"35.35"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: String,
}

/// A single line entry of a receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
}

/// Response body for a processed receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedReceipt {
    pub id: String,
}

/// Response body for a points lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiptPoints {
    pub points: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_fields() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Dasani", "price": "1.40" }],
            "total": "1.40"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(
            receipt.items,
            vec![Item {
                short_description: "Dasani".to_string(),
                price: "1.40".to_string(),
            }]
        );
        assert_eq!(receipt.total, "1.40");
    }

    #[test]
    fn test_missing_and_null_fields_decode_to_empty() {
        let receipt: Receipt =
            serde_json::from_str(r#"{ "retailer": null, "items": [{}] }"#).unwrap();

        assert_eq!(receipt.retailer, "");
        assert_eq!(receipt.total, "");
        assert_eq!(receipt.items, vec![Item::default()]);

        let receipt: Receipt = serde_json::from_str(r#"{ "items": null }"#).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let receipt: Receipt =
            serde_json::from_str(r#"{ "retailer": "Walgreens", "cashier": "Sam" }"#).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Receipt>(r#"{ "items": 5 }"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{ "total": 35.35 }"#).is_err());
    }

    #[test]
    fn test_response_bodies_serialize_to_wire_shape() {
        let processed = ProcessedReceipt {
            id: "7fb1377b-b223-49d9-a31a-5a02701dd310".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&processed).unwrap(),
            r#"{"id":"7fb1377b-b223-49d9-a31a-5a02701dd310"}"#
        );
        assert_eq!(
            serde_json::to_string(&ReceiptPoints { points: 32 }).unwrap(),
            r#"{"points":32}"#
        );
    }
}
