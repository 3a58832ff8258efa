use pearion_core::config::{env_lookup, setting};

/// Flat shipping fee added to every order, in whole currency units.
pub const DEFAULT_SHIPPING_FEE: f64 = 250.0;

/// Checkout settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    pub shipping_fee: f64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee: DEFAULT_SHIPPING_FEE,
        }
    }
}

impl CheckoutConfig {
    /// Defaults overridden by `PEARION_SHIPPING_FEE`.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            shipping_fee: setting(&lookup, "PEARION_SHIPPING_FEE", DEFAULT_SHIPPING_FEE),
        }
    }
}
