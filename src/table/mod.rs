pub mod filter;
pub mod model;
pub mod pagination;

pub use filter::*;
pub use model::*;
pub use pagination::*;
