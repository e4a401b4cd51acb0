//! AWS Lambda HTTP handler
//!
//! POST a JSON lot (any missing field takes its default) and receive the
//! projection, verdict and narrative as JSON. An empty body projects the
//! default lot; a body that is not JSON or form data is rejected.

use feedlot_simulator::{evaluate, LotParameters};
use lambda_http::{run, service_fn, Body, Error, Request, RequestPayloadExt, Response};
use serde_json::json;

fn json_response(status: u16, body: serde_json::Value) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    Ok(response)
}

fn handle_parameters(params: &LotParameters) -> (u16, serde_json::Value) {
    match evaluate(params) {
        Ok(outcome) => {
            log::info!(
                "Projected lot of {} head: profit {:.2}",
                params.head_count, outcome.projection.total_profit
            );
            let narrative = outcome.verdict.narrative();
            (200, json!({
                "parameters": params,
                "projection": outcome.projection,
                "verdict": outcome.verdict,
                "narrative": narrative,
            }))
        }
        Err(e) => {
            log::warn!("Projection rejected: {}", e);
            (422, json!({ "error": e.to_string() }))
        }
    }
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let params = match event.payload::<LotParameters>() {
        Ok(Some(params)) => params,
        Ok(None) if event.body().is_empty() => LotParameters::default(),
        // payload() yields None for a body it cannot interpret by content type
        Ok(None) => {
            log::warn!("Request body sent without a JSON content type");
            return json_response(415, json!({ "error": "request body must be sent as application/json" }));
        }
        Err(e) => {
            log::warn!("Malformed request body: {}", e);
            return json_response(400, json!({ "error": format!("malformed request body: {}", e) }));
        }
    };

    let (status, body) = handle_parameters(&params);
    json_response(status, body)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http;

    fn post(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/project");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let body = if body.is_empty() { Body::Empty } else { Body::from(body.to_string()) };
        builder.body(body).unwrap()
    }

    async fn call(request: Request) -> (u16, serde_json::Value) {
        let response = handler(request).await.unwrap();
        let status = response.status().as_u16();
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        (status, body)
    }

    #[test]
    fn test_successful_projection() {
        let (status, body) = handle_parameters(&LotParameters::default());

        assert_eq!(status, 200);
        assert_eq!(body["projection"]["total_cost"], 196_250.0);
        assert_eq!(body["verdict"]["kind"], "Profitable");
        assert!(body["narrative"].as_str().unwrap().contains("R$ 270.69"));
    }

    #[test]
    fn test_rejected_projection() {
        let params = LotParameters { entry_weight_kg: -10.0, ..Default::default() };
        let (status, body) = handle_parameters(&params);

        assert_eq!(status, 422);
        assert_eq!(body["error"], "invalid input: entry_weight_kg = -10");
    }

    #[tokio::test]
    async fn test_partial_body_fills_defaults() {
        let (status, body) = call(post(Some("application/json"), r#"{"head_count": 100}"#)).await;

        assert_eq!(status, 200);
        assert_eq!(body["parameters"]["head_count"], 100);
        assert_eq!(body["parameters"]["feeding_days"], 90);
        assert_eq!(body["projection"]["total_profit"], 57_000.0);
    }

    #[tokio::test]
    async fn test_invalid_lot_in_body() {
        let (status, body) = call(post(Some("application/json"), r#"{"head_count": 0}"#)).await;

        assert_eq!(status, 422);
        assert!(body["error"].as_str().unwrap().contains("division by zero"));
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let (status, body) = call(post(Some("application/json"), r#"{"head_count": "#)).await;

        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().starts_with("malformed request body"));
    }

    #[tokio::test]
    async fn test_body_without_content_type_rejected() {
        let (status, body) = call(post(None, r#"{"head_count": 0}"#)).await;

        assert_eq!(status, 415);
        assert!(body["error"].as_str().unwrap().contains("application/json"));
    }

    #[tokio::test]
    async fn test_empty_body_projects_default_lot() {
        let (status, body) = call(post(None, "")).await;

        assert_eq!(status, 200);
        assert_eq!(body["parameters"]["head_count"], 50);
        assert_eq!(body["verdict"]["kind"], "Profitable");
    }
}
