use crate::dispatcher::HandlerRequest;
use crate::handlers::types::NestedItem;
use crate::typed::{Handler, TypedHandlerRequest};
use anyhow::anyhow;
use serde::Serialize;
use std::convert::TryFrom;

/// Serves both nested-model demo routes; the strict-URL variant differs only
/// in the image schema its route declares.
#[derive(Debug, Clone)]
pub struct Request {
    pub item_id: i64,
    pub item: NestedItem,
}

impl TryFrom<HandlerRequest> for Request {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let item_id = req
            .path_i64("item_id")
            .ok_or_else(|| anyhow!("missing item_id"))?;
        let body = req.body.ok_or_else(|| anyhow!("missing request body"))?;
        Ok(Request {
            item_id,
            item: serde_json::from_value(body)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub item_id: i64,
    pub item: NestedItem,
}

pub struct UpdateItemNestedController;

impl Handler for UpdateItemNestedController {
    type Request = Request;
    type Response = Response;

    fn handle(&self, req: TypedHandlerRequest<Request>) -> Response {
        let Request { item_id, item } = req.data;
        Response { item_id, item }
    }
}
