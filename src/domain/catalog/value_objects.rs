use serde::Serialize;
use serde_json::Number;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::logging::LogComponent;
use crate::log_warn;

/// Item fields the API can filter on and list values for
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterField {
    Brand,
    Price,
    Product,
}

/// Raw `(data-filter, value)` pair read from one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    pub key: String,
    pub value: String,
}

impl FilterInput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Params of the `filter` action. Only populated fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Filter {
    /// Builds the filter from form controls: blank values are skipped, `price` becomes a number.
    pub fn from_inputs(inputs: &[FilterInput]) -> Self {
        let mut filter = Filter::default();
        for input in inputs.iter().filter(|i| !i.is_blank()) {
            let Ok(field) = input.key.parse::<FilterField>() else {
                log_warn!(
                    LogComponent::Domain("Filter"),
                    "Ignoring input with unknown data-filter '{}'",
                    input.key
                );
                continue;
            };
            match field {
                FilterField::Product => filter.product = Some(input.value.clone()),
                FilterField::Brand => filter.brand = Some(input.value.clone()),
                FilterField::Price => match coerce_price(&input.value) {
                    Some(price) => filter.price = Some(price),
                    None => {
                        log_warn!(
                            LogComponent::Domain("Filter"),
                            "Ignoring non-numeric price '{}'",
                            input.value
                        );
                    }
                },
            }
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.price.is_none() && self.brand.is_none()
    }
}

/// Whole prices are sent as integers (`100`, not `100.0`).
pub fn coerce_price(raw: &str) -> Option<Number> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
