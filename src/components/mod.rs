//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like inputs, tables, and modals.

pub mod dataset_name_dialog;
pub use dataset_name_dialog::DatasetNameDialog;

mod search_input;
pub use search_input::SearchInput;

mod group_selector;
pub use group_selector::GroupSelector;

mod chart_kind_selector;
pub use chart_kind_selector::ChartKindSelector;

mod metric_chart;
pub use metric_chart::{ChartKind, MetricChart};

mod data_table;
pub use data_table::DataTable;

mod pagination;
pub use pagination::Pagination;

mod loading_indicator;
pub use loading_indicator::{hide_loading, show_loading, LoadingFlag, LoadingIndicator};
