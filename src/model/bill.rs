use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One distinct product in a cart. `price` is a snapshot captured when the
/// line was created, so a stored bill's total survives later catalog price
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: Uuid,
    pub product_id: Uuid,
    #[schema(example = 2)]
    pub quantity: u32,
    #[schema(example = 49.99)]
    pub price: f64,
}

/// Customer details plus cart contents, as entered in the billing flow.
/// Only submittable once every field is filled and the cart is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    #[schema(example = "INV-0042")]
    pub bill_no: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub gst: String,
    pub items: Vec<CartLine>,
}

impl BillDraft {
    /// True iff every customer field is non-empty after trimming and at
    /// least one cart line exists.
    pub fn is_submittable(&self) -> bool {
        let fields = [
            &self.bill_no,
            &self.name,
            &self.email,
            &self.mobile,
            &self.address,
            &self.gst,
        ];
        fields.iter().all(|f| !f.trim().is_empty()) && !self.items.is_empty()
    }
}

/// A finalized bill as stored: the draft plus a server-computed total over
/// the snapshotted line prices.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub bill_no: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub gst: String,
    pub items: Vec<CartLine>,
    #[schema(example = 99.98)]
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn from_draft(draft: BillDraft, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            bill_no: draft.bill_no,
            name: draft.name,
            email: draft.email,
            mobile: draft.mobile,
            address: draft.address,
            gst: draft.gst,
            items: draft.items,
            total,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(items: Vec<CartLine>) -> BillDraft {
        BillDraft {
            bill_no: "INV-1".into(),
            name: "Jane".into(),
            email: "jane@example.com".into(),
            mobile: "0123".into(),
            address: "12 High St".into(),
            gst: "GST-9".into(),
            items,
        }
    }

    fn line() -> CartLine {
        CartLine {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity: 1,
            price: 10.0,
        }
    }

    #[test]
    fn empty_cart_is_never_submittable() {
        assert!(!draft(vec![]).is_submittable());
    }

    #[test]
    fn whitespace_fields_do_not_count() {
        let mut d = draft(vec![line()]);
        assert!(d.is_submittable());
        d.gst = "   ".into();
        assert!(!d.is_submittable());
    }
}
