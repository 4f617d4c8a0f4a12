use serde::{Deserialize, Serialize};

/// Item type that alone forces expedited shipping.
pub const EXPEDITED_ITEM_TYPE: &str = "A";

/// Order total above which expediting is forced regardless of item types.
pub const EXPEDITE_THRESHOLD_VALUE: f64 = 1000.0;

/// A single line item of an order. Carries no identity beyond its fields;
/// callers construct these per decision call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "type")]
    pub item_type: String,
}

/// Decides whether an order requires expedited shipping: true if any item is
/// of the expedited type, or if the order total strictly exceeds the
/// threshold. Stops scanning at the first qualifying item.
pub fn should_expedite(items: &[OrderItem], total_value: f64) -> bool {
    total_value > EXPEDITE_THRESHOLD_VALUE
        || items
            .iter()
            .any(|item| item.item_type == EXPEDITED_ITEM_TYPE)
}
