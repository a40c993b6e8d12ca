/// Default free-shipping threshold in minor currency units.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: i64 = 1999;

/// Default flat shipping fee in minor currency units.
pub const DEFAULT_SHIPPING_FEE: i64 = 99;

/// Flat-fee shipping policy: the fee applies below the threshold and is
/// waived at or above it. Configuration, not derived logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: i64,
    pub fee: i64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            fee: DEFAULT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    pub fn fee_for(&self, subtotal: i64) -> i64 {
        if subtotal >= self.free_shipping_threshold {
            0
        } else {
            self.fee
        }
    }

    pub fn order_total(&self, subtotal: i64) -> i64 {
        subtotal + self.fee_for(subtotal)
    }
}
