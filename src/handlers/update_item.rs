use crate::dispatcher::HandlerRequest;
use crate::handlers::types::Item;
use crate::typed::{Handler, TypedHandlerRequest};
use anyhow::anyhow;
use serde::Serialize;
use std::convert::TryFrom;

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
        Ok(Request {
            item_id,
            item: serde_json::from_value(body)?,
        })
    }
}

/// The path parameter merged flat with the item's fields.
#[derive(Debug, Serialize)]
pub struct Response {
    pub item_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

pub struct UpdateItemController;

impl Handler for UpdateItemController {
    type Request = Request;
    type Response = Response;

    fn handle(&self, req: TypedHandlerRequest<Request>) -> Response {
        let Request { item_id, item } = req.data;
        Response {
            item_id,
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
        }
    }
}
