//! Handler registry wiring the demo routes to their handler coroutines.

use crate::dispatcher::Dispatcher;
use crate::handlers::*;

/// Register every demo handler with the dispatcher.
///
/// # Safety
///
/// Spawns handler coroutines; the `may` runtime must be initialized first.
pub unsafe fn register_all(dispatcher: &mut Dispatcher) {
    dispatcher.register_handler("root", root::handler);
    dispatcher.register_handler("read_item", read_item::handler);
    dispatcher.register_handler("list_items", list_items::handler);
    dispatcher.register_handler("read_user_me", read_user_me::handler);
    dispatcher.register_handler("read_user", read_user::handler);
    dispatcher.register_handler("get_model", get_model::handler);
    dispatcher.register_handler("read_file", read_file::handler);
    dispatcher.register_handler("read_item_detail", read_item_detail::handler);
    dispatcher.register_handler("read_required_item", read_required_item::handler);
    dispatcher.register_handler("read_items_filtered", read_items_filtered::handler);
    dispatcher.register_handler("read_items_list", read_items_list::handler);
    dispatcher.register_handler("read_hidden_query", read_hidden_query::handler);
    dispatcher.register_handler("read_item_numeric", read_item_numeric::handler);
    dispatcher.register_handler("create_index_weights", create_index_weights::handler);

    dispatcher.register_typed("create_item", create_item::CreateItemController);
    dispatcher.register_typed("update_item", update_item::UpdateItemController);
    dispatcher.register_typed("update_item_full", update_item_full::UpdateItemFullController);
    dispatcher.register_typed(
        "update_item_importance",
        update_item_importance::UpdateItemImportanceController,
    );
    dispatcher.register_typed(
        "update_item_embedded",
        update_item_embedded::UpdateItemEmbeddedController,
    );
    dispatcher.register_typed(
        "update_item_nested",
        update_item_nested::UpdateItemNestedController,
    );
    dispatcher.register_typed("create_offer", create_offer::CreateOfferController);
}
