use super::order::Order;

/// Restrict orders to products containing the label, case-insensitively.
/// An empty label keeps everything.
pub fn scope_by_product(orders: &[Order], label: &str) -> Vec<Order> {
    if label.is_empty() {
        return orders.to_vec();
    }

    let needle = label.to_lowercase();
    orders
        .iter()
        .filter(|order| order.product.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Human-readable description of the active product scope
pub fn describe_scope(label: &str, matched: usize) -> String {
    if label.is_empty() {
        "All Products".to_string()
    } else if matched > 0 {
        label.to_string()
    } else {
        format!("No match for '{}'", label)
    }
}
