use crate::dispatcher::HandlerRequest;
use crate::handlers::types::Item;
use crate::typed::{Handler, TypedHandlerRequest};
use anyhow::anyhow;
use serde::Serialize;
use std::convert::TryFrom;

/// Serves both embedded-body demo routes: the plain embed and the
/// field-constrained variant. They differ only in the schema their route
/// declares.
#[derive(Debug, Clone)]
pub struct Request {
    pub item_id: i64,
    pub item: Item,
}

impl TryFrom<HandlerRequest> for Request {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let item_id = req
            .path_i64("item_id")
            .ok_or_else(|| anyhow!("missing item_id"))?;
        let body = req.body.ok_or_else(|| anyhow!("missing request body"))?;
        let item = body
            .get("item")
            .cloned()
            .ok_or_else(|| anyhow!("missing body section `item`"))?;
        Ok(Request {
            item_id,
            item: serde_json::from_value(item)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub item_id: i64,
    pub item: Item,
}

pub struct UpdateItemEmbeddedController;

impl Handler for UpdateItemEmbeddedController {
    type Request = Request;
    type Response = Response;

    fn handle(&self, req: TypedHandlerRequest<Request>) -> Response {
        let Request { item_id, item } = req.data;
        Response { item_id, item }
    }
}
