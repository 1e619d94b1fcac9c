use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use super::order::Order;

/// Dimension the dashboard aggregates metric series by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Product,
    Date,
    Time,
    Month,
    Week,
    Day,
    Hour,
    City,
}

impl GroupBy {
    pub const ALL: [GroupBy; 8] = [
        GroupBy::Product,
        GroupBy::Date,
        GroupBy::Time,
        GroupBy::Month,
        GroupBy::Week,
        GroupBy::Day,
        GroupBy::Hour,
        GroupBy::City,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GroupBy::Product => "Product",
            GroupBy::Date => "Date",
            GroupBy::Time => "Time",
            GroupBy::Month => "Month",
            GroupBy::Week => "Week",
            GroupBy::Day => "Day",
            GroupBy::Hour => "Hour",
            GroupBy::City => "City",
        }
    }

    pub fn from_name(name: &str) -> Option<GroupBy> {
        GroupBy::ALL.iter().copied().find(|group| group.name() == name)
    }

    /// The group key of one order, or `None` when the order lacks the dimension
    fn key_of(&self, order: &Order) -> Option<GroupKey> {
        match self {
            GroupBy::Product => {
                if order.product.is_empty() {
                    None
                } else {
                    Some(GroupKey::Text(order.product.clone()))
                }
            }
            GroupBy::Date => order.date().map(GroupKey::Date),
            GroupBy::Time => order.time().map(GroupKey::Time),
            GroupBy::Month => order.month().map(GroupKey::Int),
            GroupBy::Week => order.week().map(GroupKey::Int),
            GroupBy::Day => order.day().map(GroupKey::Int),
            GroupBy::Hour => order.hour().map(GroupKey::Int),
            GroupBy::City => order.city.clone().map(GroupKey::Text),
        }
    }
}

/// Group keys ordered by their native type, so hours sort numerically
/// and dates chronologically instead of by label text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Int(u32),
    Date(NaiveDate),
    Time(NaiveTime),
    Text(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Int(value) => write!(f, "{}", value),
            GroupKey::Date(date) => write!(f, "{}", date),
            GroupKey::Time(time) => write!(f, "{}", time),
            GroupKey::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Parallel labels and values for one metric
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

impl MetricSeries {
    pub fn push(&mut self, label: String, value: f64) {
        self.x.push(label);
        self.y.push(value);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn max_y(&self) -> f64 {
        self.y.iter().copied().fold(0.0, f64::max)
    }
}

/// The four metric series computed for one grouping dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedMetrics {
    pub quantity_ordered: MetricSeries,
    pub total_sales: MetricSeries,
    pub average_order_value: MetricSeries,
    pub total_order_value: MetricSeries,
}

#[derive(Default)]
struct GroupAccumulator {
    quantity: f64,
    sales: f64,
    order_value_sum: f64,
    order_value_count: usize,
}

/// Aggregate the four metric series by a grouping dimension. Orders without
/// the group key are excluded; missing values are skipped within a group.
pub fn compute_grouped(orders: &[Order], group_by: GroupBy) -> GroupedMetrics {
    let mut groups: BTreeMap<GroupKey, GroupAccumulator> = BTreeMap::new();

    for order in orders {
        let Some(key) = group_by.key_of(order) else {
            continue;
        };
        let acc = groups.entry(key).or_default();
        if let Some(quantity) = order.quantity {
            acc.quantity += quantity;
        }
        if let Some(sales) = order.sales {
            acc.sales += sales;
        }
        if let Some(order_value) = order.order_value {
            acc.order_value_sum += order_value;
            acc.order_value_count += 1;
        }
    }

    let mut metrics = GroupedMetrics::default();
    for (key, acc) in &groups {
        let label = key.to_string();
        let mean_order_value = if acc.order_value_count > 0 {
            acc.order_value_sum / acc.order_value_count as f64
        } else {
            0.0
        };

        metrics.quantity_ordered.push(label.clone(), acc.quantity);
        metrics.total_sales.push(label.clone(), acc.sales);
        metrics.average_order_value.push(label.clone(), mean_order_value);
        metrics.total_order_value.push(label, acc.order_value_sum);
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::order::RawOrder;

    fn order(product: &str, quantity: &str, price: &str, date: &str, address: &str) -> Order {
        Order::from_raw(RawOrder {
            order_id: Some("1".to_string()),
            product: Some(product.to_string()),
            quantity_ordered: Some(quantity.to_string()),
            price_each: Some(price.to_string()),
            order_date: Some(date.to_string()),
            purchase_address: Some(address.to_string()),
        })
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("Cable", "2", "10.00", "04/19/19 08:46", "1 A St, Dallas, TX 75001"),
            order("Cable", "1", "10.00", "04/19/19 14:10", "2 B St, Boston, MA 02215"),
            order("Monitor", "1", "150.00", "04/20/19 09:00", "3 C St, Dallas, TX 75001"),
        ]
    }

    #[test]
    fn test_group_by_product() {
        let metrics = compute_grouped(&sample_orders(), GroupBy::Product);

        assert_eq!(metrics.quantity_ordered.x, vec!["Cable", "Monitor"]);
        assert_eq!(metrics.quantity_ordered.y, vec![3.0, 1.0]);
        assert_eq!(metrics.total_sales.y, vec![30.0, 150.0]);
        assert_eq!(metrics.average_order_value.y, vec![10.0, 150.0]);
        assert_eq!(metrics.total_order_value.y, vec![20.0, 150.0]);
    }

    #[test]
    fn test_hours_sort_numerically() {
        let orders = vec![
            order("Cable", "1", "10.00", "04/19/19 14:10", "1 A St, Dallas, TX 75001"),
            order("Cable", "1", "10.00", "04/19/19 08:46", "1 A St, Dallas, TX 75001"),
            order("Cable", "1", "10.00", "04/19/19 09:15", "1 A St, Dallas, TX 75001"),
        ];
        let metrics = compute_grouped(&orders, GroupBy::Hour);

        // Numeric keys must not sort as text ("14" before "8" would be wrong)
        assert_eq!(metrics.quantity_ordered.x, vec!["8", "9", "14"]);
    }

    #[test]
    fn test_orders_without_key_are_excluded() {
        let mut orders = sample_orders();
        orders.push(order("Cable", "1", "10.00", "bad date", "1 A St, Dallas, TX 75001"));

        let by_hour = compute_grouped(&orders, GroupBy::Hour);
        let total: f64 = by_hour.quantity_ordered.y.iter().sum();
        assert_eq!(total, 4.0);

        let by_product = compute_grouped(&orders, GroupBy::Product);
        let total: f64 = by_product.quantity_ordered.y.iter().sum();
        assert_eq!(total, 5.0);
    }

    #[test]
    fn test_missing_values_are_skipped_within_group() {
        let orders = vec![
            order("Cable", "2", "10.00", "04/19/19 08:46", "1 A St, Dallas, TX 75001"),
            order("Cable", "oops", "10.00", "04/19/19 08:50", "1 A St, Dallas, TX 75001"),
        ];
        let metrics = compute_grouped(&orders, GroupBy::Product);

        assert_eq!(metrics.quantity_ordered.y, vec![2.0]);
        assert_eq!(metrics.total_sales.y, vec![20.0]);
        // The mean is over present order values only
        assert_eq!(metrics.average_order_value.y, vec![10.0]);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let metrics = compute_grouped(&[], GroupBy::City);

        assert!(metrics.quantity_ordered.is_empty());
        assert!(metrics.total_sales.is_empty());
        assert!(metrics.average_order_value.is_empty());
        assert!(metrics.total_order_value.is_empty());
    }

    #[test]
    fn test_group_by_names_round_trip() {
        for group in GroupBy::ALL {
            assert_eq!(GroupBy::from_name(group.name()), Some(group));
        }
        assert_eq!(GroupBy::from_name("Quarter"), None);
    }
}
