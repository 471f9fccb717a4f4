use crate::dispatcher::HandlerRequest;
use crate::handlers::types::Offer;
use crate::typed::{Handler, TypedHandlerRequest};
use anyhow::anyhow;
use std::convert::TryFrom;

#[derive(Debug, Clone)]
pub struct Request {
    pub offer: Offer,
}

impl TryFrom<HandlerRequest> for Request {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let body = req.body.ok_or_else(|| anyhow!("missing request body"))?;
        Ok(Request {
            offer: serde_json::from_value(body)?,
        })
    }
}

pub struct CreateOfferController;

impl Handler for CreateOfferController {
    type Request = Request;
    /// Idempotent echo: the offer goes back exactly as it was validated.
    type Response = Offer;

    fn handle(&self, req: TypedHandlerRequest<Request>) -> Offer {
        req.data.offer
    }
}
