use std::collections::HashSet;

use super::order::Order;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SalesStats {
    pub order_count: usize,
    pub total_revenue: f64,
    pub distinct_products: usize,
    pub distinct_cities: usize,
    pub coercion_failures: usize,
    pub missing_timestamps: usize,
    pub missing_cities: usize,
}

impl SalesStats {
    pub fn compute_from_orders(orders: &[Order]) -> Self {
        let mut stats = SalesStats::default();
        let mut products = HashSet::new();
        let mut cities = HashSet::new();

        for order in orders {
            stats.order_count += 1;

            if let Some(sales) = order.sales {
                stats.total_revenue += sales;
            }
            if !order.product.is_empty() {
                products.insert(order.product.clone());
            }
            if let Some(city) = &order.city {
                cities.insert(city.clone());
            } else {
                stats.missing_cities += 1;
            }
            if order.quantity.is_none() || order.price_each.is_none() {
                stats.coercion_failures += 1;
            }
            if order.ordered_at.is_none() {
                stats.missing_timestamps += 1;
            }
        }

        stats.distinct_products = products.len();
        stats.distinct_cities = cities.len();

        stats
    }
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

    #[test]
    fn test_compute_from_orders() {
        let orders = vec![
            order("Cable", "2", "10.00", "04/19/19 08:46", "1 A St, Dallas, TX 75001"),
            order("Monitor", "1", "150.00", "04/20/19 09:00", "2 B St, Boston, MA 02215"),
            order("Cable", "oops", "10.00", "bad date", "no city"),
        ];
        let stats = SalesStats::compute_from_orders(&orders);

        assert_eq!(stats.order_count, 3);
        assert_eq!(stats.total_revenue, 170.0);
        assert_eq!(stats.distinct_products, 2);
        assert_eq!(stats.distinct_cities, 2);
        assert_eq!(stats.coercion_failures, 1);
        assert_eq!(stats.missing_timestamps, 1);
        assert_eq!(stats.missing_cities, 1);
    }

    #[test]
    fn test_empty_dataset() {
        let stats = SalesStats::compute_from_orders(&[]);
        assert_eq!(stats, SalesStats::default());
    }
}
