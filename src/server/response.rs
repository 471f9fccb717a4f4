use may_minihttp::Response;
use serde_json::Value;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

/// Write a handler's JSON response. String bodies go out as plain text,
/// everything else as JSON.
pub fn write_handler_response(res: &mut Response, status: u16, body: Value) {
    let reason = status_reason(status);
    res.status_code(status as usize, reason);
    match body {
        Value::String(s) => {
            res.header("Content-Type: text/plain");
            res.body_vec(s.into_bytes());
        }
        other => {
            res.header("Content-Type: application/json");
            res.body_vec(other.to_string().into_bytes());
        }
    }
}

/// Write a JSON error body with the given status.
pub fn write_json_error(res: &mut Response, status: u16, body: Value) {
    let reason = status_reason(status);
    res.status_code(status as usize, reason);
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(422), "Unprocessable Entity");
    }
}
