//! Billing configuration.

use billfold_core::ValueObject;
use serde::{Deserialize, Serialize};

/// Tax and currency settings applied by the calculator and the renderer.
///
/// Earlier client versions hard-coded these (8% GST, `$` prefix); they are
/// explicit configuration now so a deployment can vary them without touching
/// the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Flat tax rate applied to the subtotal (`0.08` = 8% GST).
    pub tax_rate: f64,
    /// Symbol prefixed to every displayed amount.
    pub currency_symbol: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ValueObject for BillingConfig {}
