use crate::dispatcher::HandlerRequest;
use crate::handlers::types::{Item, User};
use crate::typed::{Handler, TypedHandlerRequest};
use anyhow::anyhow;
use serde::Serialize;
use std::convert::TryFrom;

#[derive(Debug, Clone)]
pub struct Request {
    pub item_id: i64,
    pub item: Item,
    pub user: User,
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
        let user = body
            .get("user")
            .cloned()
            .ok_or_else(|| anyhow!("missing body section `user`"))?;
        Ok(Request {
            item_id,
            item: serde_json::from_value(item)?,
            user: serde_json::from_value(user)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub item_id: i64,
    pub item: Item,
    pub user: User,
}

pub struct UpdateItemFullController;

impl Handler for UpdateItemFullController {
    type Request = Request;
    type Response = Response;

    fn handle(&self, req: TypedHandlerRequest<Request>) -> Response {
        let Request {
            item_id,
            item,
            user,
        } = req.data;
        Response {
            item_id,
            item,
            user,
        }
    }
}
