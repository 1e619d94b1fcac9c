use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Deserialize;

use crate::utils::date_utils;

/// Column titles of the orders table, in render order
pub const ORDER_COLUMNS: [&str; 7] = [
    "Order ID",
    "Product",
    "Quantity Ordered",
    "Price Each",
    "Order Date",
    "City",
    "Sales",
];

/// Owned column titles for building a table model
pub fn order_columns() -> Vec<String> {
    ORDER_COLUMNS.iter().map(|title| title.to_string()).collect()
}

/// One CSV record exactly as exported, before any coercion
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    #[serde(rename = "Order ID")]
    pub order_id: Option<String>,
    #[serde(rename = "Product")]
    pub product: Option<String>,
    #[serde(rename = "Quantity Ordered")]
    pub quantity_ordered: Option<String>,
    #[serde(rename = "Price Each")]
    pub price_each: Option<String>,
    #[serde(rename = "Order Date")]
    pub order_date: Option<String>,
    #[serde(rename = "Purchase Address")]
    pub purchase_address: Option<String>,
}

/// An enriched order record. Fields that fail coercion become `None`
/// instead of failing the load; derived metrics propagate the gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub product: String,
    pub quantity: Option<f64>,
    pub price_each: Option<f64>,
    pub sales: Option<f64>,
    pub order_value: Option<f64>,
    pub ordered_at: Option<NaiveDateTime>,
    pub city: Option<String>,
}

impl Order {
    /// Coerce and enrich one raw CSV record
    pub fn from_raw(raw: RawOrder) -> Self {
        let quantity = coerce_number(raw.quantity_ordered.as_deref());
        let price_each = coerce_number(raw.price_each.as_deref());
        let sales = match (quantity, price_each) {
            (Some(quantity), Some(price)) => Some(quantity * price),
            _ => None,
        };
        let order_value = match (sales, quantity) {
            (Some(sales), Some(quantity)) if quantity != 0.0 => Some(sales / quantity),
            _ => None,
        };
        let ordered_at = raw.order_date.as_deref().and_then(date_utils::parse_order_date);
        let city = raw.purchase_address.as_deref().and_then(city_from_address);

        Order {
            order_id: raw.order_id.unwrap_or_default(),
            product: raw.product.unwrap_or_default(),
            quantity,
            price_each,
            sales,
            order_value,
            ordered_at,
            city,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.ordered_at.map(|dt| dt.date())
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.ordered_at.map(|dt| dt.time())
    }

    pub fn month(&self) -> Option<u32> {
        self.ordered_at.map(|dt| dt.month())
    }

    pub fn week(&self) -> Option<u32> {
        self.ordered_at.map(|dt| dt.iso_week().week())
    }

    pub fn day(&self) -> Option<u32> {
        self.ordered_at.map(|dt| dt.day())
    }

    pub fn hour(&self) -> Option<u32> {
        self.ordered_at.map(|dt| dt.hour())
    }

    /// Rendered cell strings matching `ORDER_COLUMNS`
    pub fn table_cells(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.product.clone(),
            format_opt_number(self.quantity, 0),
            format_opt_number(self.price_each, 2),
            self.ordered_at
                .as_ref()
                .map(date_utils::format_order_date)
                .unwrap_or_default(),
            self.city.clone().unwrap_or_default(),
            format_opt_number(self.sales, 2),
        ]
    }
}

/// The merged contents of every CSV file in the active data directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesDataset {
    pub orders: Vec<Order>,
}

impl SalesDataset {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Parse a numeric field, coercing failures to a missing value
fn coerce_number(field: Option<&str>) -> Option<f64> {
    field?.trim().parse().ok()
}

/// Extract the city from an address like "917 1st St, Dallas, TX 75001"
fn city_from_address(address: &str) -> Option<String> {
    let mut parts = address.split(',');
    parts.next()?;
    let city = parts.next()?.trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}

fn format_opt_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{:.*}", decimals, value),
        None => String::new(),
    }
}
