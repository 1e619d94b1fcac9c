pub mod grouping;
pub mod order;
pub mod problem_order;
pub mod sales_stats;
pub mod scope;

pub use grouping::*;
pub use order::*;
pub use problem_order::*;
pub use sales_stats::*;
pub use scope::*;
