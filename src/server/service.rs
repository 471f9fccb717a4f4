use super::request::{parse_request, ParsedRequest};
use super::response::{write_handler_response, write_json_error};
use crate::dispatcher::Dispatcher;
use crate::router::Router;
use crate::validator;
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::sync::{Arc, RwLock};

/// The HTTP service wiring the full pipeline: parse, route, validate,
/// dispatch, respond.
///
/// Cloned once per connection by `may_minihttp`; router and dispatcher sit
/// behind shared `RwLock` handles.
#[derive(Clone)]
pub struct AppService {
    pub router: Arc<RwLock<Router>>,
    pub dispatcher: Arc<RwLock<Dispatcher>>,
}

impl AppService {
    pub fn new(router: Router, dispatcher: Dispatcher) -> Self {
        Self {
            router: Arc::new(RwLock::new(router)),
            dispatcher: Arc::new(RwLock::new(dispatcher)),
        }
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
pub fn health_endpoint(res: &mut Response) -> io::Result<()> {
    write_handler_response(res, 200, json!({ "status": "ok" }));
    Ok(())
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest {
            method,
            path,
            headers: _,
            query_params,
            body,
        } = parse_request(req);

        if method == "GET" && path == "/health" {
            return health_endpoint(res);
        }

        let method: Method = match method.parse() {
            Ok(m) => m,
            Err(_) => {
                write_json_error(res, 405, json!({ "detail": "Method Not Allowed" }));
                return Ok(());
            }
        };

        let route_opt = {
            #[allow(clippy::unwrap_used)]
            let router = self.router.read().unwrap();
            router.route(method, &path)
        };

        let Some(mut route_match) = route_opt else {
            write_json_error(res, 404, json!({ "detail": "Not Found" }));
            return Ok(());
        };
        route_match.query_params = query_params;

        let valid = match validator::validate_request(
            &route_match.route,
            &route_match.path_params,
            &route_match.query_params,
            body.as_ref(),
        ) {
            Ok(valid) => valid,
            Err(validation) => {
                write_json_error(res, 422, validation.detail());
                return Ok(());
            }
        };

        let handler_response = {
            #[allow(clippy::unwrap_used)]
            let dispatcher = self.dispatcher.read().unwrap();
            dispatcher.dispatch(route_match, valid)
        };

        match handler_response {
            Some(hr) => write_handler_response(res, hr.status, hr.body),
            None => write_json_error(
                res,
                500,
                json!({ "detail": "Handler failed or not registered" }),
            ),
        }
        Ok(())
    }
}
