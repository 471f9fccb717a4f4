use crate::dispatcher::HandlerRequest;
use crate::handlers::types::Item;
use crate::typed::{Handler, TypedHandlerRequest};
use anyhow::anyhow;
use serde::Serialize;
use std::convert::TryFrom;

#[derive(Debug, Clone)]
pub struct Request {
    pub item: Item,
}

impl TryFrom<HandlerRequest> for Request {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let body = req.body.ok_or_else(|| anyhow!("missing request body"))?;
        Ok(Request {
            item: serde_json::from_value(body)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

pub struct CreateItemController;

impl Handler for CreateItemController {
    type Request = Request;
    type Response = Response;

    fn handle(&self, req: TypedHandlerRequest<Request>) -> Response {
        let item = req.data.item;
        // price_with_tax appears only when a tax was sent.
        let price_with_tax = item.tax.map(|tax| item.price + tax);
        Response {
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
            price_with_tax,
        }
    }
}
