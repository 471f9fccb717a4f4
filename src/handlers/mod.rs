//! Demo route handlers.
//!
//! Every handler is a minimal echo of its validated input - one per
//! request-parsing feature. Scalar routes use plain channel handlers; routes
//! binding structured bodies use the typed layer so the model travels through
//! a real serde struct.

pub mod types;

pub mod create_index_weights;
pub mod create_item;
pub mod create_offer;
pub mod get_model;
pub mod list_items;
pub mod read_file;
pub mod read_hidden_query;
pub mod read_item;
pub mod read_item_detail;
pub mod read_item_numeric;
pub mod read_items_filtered;
pub mod read_items_list;
pub mod read_required_item;
pub mod read_user;
pub mod read_user_me;
pub mod root;
pub mod update_item;
pub mod update_item_embedded;
pub mod update_item_full;
pub mod update_item_importance;
pub mod update_item_nested;
