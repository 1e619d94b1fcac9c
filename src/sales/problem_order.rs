use super::order::Order;
use crate::utils::config;

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemOrder {
    pub order_id: String,
    pub product: String,
    pub issue_type: String,
    pub details: String,
    pub severity: String,
}

/// Returns the first data-quality issue of a record, if any
pub fn check_order(order: &Order) -> Option<ProblemOrder> {
    // Check for numeric coercion failures
    if order.quantity.is_none() {
        return Some(ProblemOrder {
            order_id: order.order_id.clone(),
            product: order.product.clone(),
            issue_type: "Unparseable Quantity".to_string(),
            details: "Quantity Ordered could not be read as a number, so the row is excluded from quantity and revenue totals".to_string(),
            severity: "high".to_string(),
        });
    }

    if order.price_each.is_none() {
        return Some(ProblemOrder {
            order_id: order.order_id.clone(),
            product: order.product.clone(),
            issue_type: "Unparseable Price".to_string(),
            details: "Price Each could not be read as a number, so the row is excluded from revenue totals".to_string(),
            severity: "high".to_string(),
        });
    }

    // Check for a zero quantity
    if order.quantity == Some(0.0) {
        return Some(ProblemOrder {
            order_id: order.order_id.clone(),
            product: order.product.clone(),
            issue_type: "Zero Quantity".to_string(),
            details: "An order value cannot be derived from a zero quantity".to_string(),
            severity: "medium".to_string(),
        });
    }

    // Check for an unparseable timestamp
    if order.ordered_at.is_none() {
        return Some(ProblemOrder {
            order_id: order.order_id.clone(),
            product: order.product.clone(),
            issue_type: "Unparseable Timestamp".to_string(),
            details: format!(
                "Order Date does not match the expected \"{}\" layout, so the row is excluded from time groupings",
                config::ORDER_DATE_FORMAT
            ),
            severity: "medium".to_string(),
        });
    }

    // Check for a missing city component
    if order.city.is_none() {
        return Some(ProblemOrder {
            order_id: order.order_id.clone(),
            product: order.product.clone(),
            issue_type: "Missing City".to_string(),
            details: "Purchase Address has no city component, so the row is excluded from the City grouping".to_string(),
            severity: "low".to_string(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::order::RawOrder;

    fn order(quantity: &str, price: &str, date: &str, address: &str) -> Order {
        Order::from_raw(RawOrder {
            order_id: Some("176558".to_string()),
            product: Some("USB-C Charging Cable".to_string()),
            quantity_ordered: Some(quantity.to_string()),
            price_each: Some(price.to_string()),
            order_date: Some(date.to_string()),
            purchase_address: Some(address.to_string()),
        })
    }

    #[test]
    fn test_clean_order_has_no_issue() {
        let clean = order("2", "11.95", "04/19/19 08:46", "917 1st St, Dallas, TX 75001");
        assert_eq!(check_order(&clean), None);
    }

    #[test]
    fn test_issue_precedence() {
        let bad_quantity = order("oops", "11.95", "04/19/19 08:46", "917 1st St, Dallas, TX 75001");
        assert_eq!(check_order(&bad_quantity).unwrap().issue_type, "Unparseable Quantity");

        let bad_price = order("2", "oops", "04/19/19 08:46", "917 1st St, Dallas, TX 75001");
        assert_eq!(check_order(&bad_price).unwrap().issue_type, "Unparseable Price");

        let zero_quantity = order("0", "11.95", "04/19/19 08:46", "917 1st St, Dallas, TX 75001");
        assert_eq!(check_order(&zero_quantity).unwrap().issue_type, "Zero Quantity");

        let bad_date = order("2", "11.95", "April 19th", "917 1st St, Dallas, TX 75001");
        assert_eq!(check_order(&bad_date).unwrap().issue_type, "Unparseable Timestamp");

        let no_city = order("2", "11.95", "04/19/19 08:46", "917 1st St");
        let problem = check_order(&no_city).unwrap();
        assert_eq!(problem.issue_type, "Missing City");
        assert_eq!(problem.severity, "low");
    }
}
