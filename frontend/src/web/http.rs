//! `HttpClient` over the browser's `fetch`

use ticketdesk::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, err: JsValue) -> ApiError {
    ApiError::Network(format!("{}: {:?}", context, err))
}

/// Stateless; every call goes straight to `window.fetch`
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| js_error("failed to create headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("failed to set header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("failed to build request", e))?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("fetch failed", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("unexpected fetch result", e))?;
        let status = response.status();

        let promise = response
            .text()
            .map_err(|e| js_error("failed to read body", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("failed to read body", e))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
