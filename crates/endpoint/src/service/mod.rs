//! Aggregation of provider details into per-request health documents

mod merge;

pub use merge::merge_details;

use crate::provider::{DetailsProvider, RequestContext};
use crate::reporting::HttpResponse;
use futures::FutureExt;
use hyper::{Body, Method, Request, Response};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, warn};
use vitals_core::{Details, HealthReport, Status};

/// Answers health requests for one service
///
/// The template is fixed at construction. Every request works on its own
/// copy, so the service can be shared across any number of concurrent
/// requests behind an `Arc`.
pub struct HealthService {
    /// Static metadata copied into every response
    template: HealthReport,
    /// Detail providers in registration order
    providers: Vec<Arc<dyn DetailsProvider>>,
}

impl HealthService {
    pub fn new(template: HealthReport, providers: Vec<Arc<dyn DetailsProvider>>) -> Self {
        Self {
            template,
            providers,
        }
    }

    pub fn builder(template: HealthReport) -> HealthServiceBuilder {
        HealthServiceBuilder {
            template,
            providers: Vec::new(),
        }
    }

    pub fn template(&self) -> &HealthReport {
        &self.template
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Build a fresh health document for `request`
    ///
    /// The status is reset to `pass` and `details` is rebuilt from the
    /// providers that authorize the request. A provider that returns an
    /// error or panics is left out of the document.
    pub async fn report(&self, request: &RequestContext) -> HealthReport {
        let mut report = self.template.clone();
        report.status = Status::Pass;

        let mut details = Details::new();
        for (index, provider) in self.providers.iter().enumerate() {
            if !provider.authorize_health(request) {
                debug!(provider = index, "details provider declined request");
                continue;
            }
            if let Some(contribution) = collect(index, provider.as_ref()).await {
                merge_details(&mut details, contribution);
            }
        }

        report.details = Some(details);
        report
    }

    /// Handle an inbound request
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Body> {
        let context = RequestContext::from_request(&req);
        drop(req);
        self.respond(&context).await
    }

    /// Produce the response for an already-captured request
    pub async fn respond(&self, request: &RequestContext) -> Response<Body> {
        match *request.method() {
            Method::OPTIONS => HttpResponse::preflight(),
            Method::GET | Method::HEAD => {
                let report = self.report(request).await;
                match serde_json::to_vec(&report) {
                    Ok(body) => HttpResponse::health(body),
                    Err(e) => {
                        error!(error = %e, "failed to serialize health document");
                        HttpResponse::health(Vec::new())
                    }
                }
            }
            _ => HttpResponse::method_not_allowed(),
        }
    }
}

async fn collect(index: usize, provider: &dyn DetailsProvider) -> Option<Details> {
    match AssertUnwindSafe(provider.health_details())
        .catch_unwind()
        .await
    {
        Ok(Ok(details)) => Some(details),
        Ok(Err(e)) => {
            warn!(provider = index, error = %e, "details provider failed, omitting its details");
            None
        }
        Err(_) => {
            warn!(provider = index, "details provider panicked, omitting its details");
            None
        }
    }
}

/// Builder for [`HealthService`]
pub struct HealthServiceBuilder {
    template: HealthReport,
    providers: Vec<Arc<dyn DetailsProvider>>,
}

impl HealthServiceBuilder {
    /// Register a provider after the ones already added
    #[must_use]
    pub fn provider<P: DetailsProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Register an already shared provider
    #[must_use]
    pub fn shared_provider(mut self, provider: Arc<dyn DetailsProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn build(self) -> HealthService {
        HealthService::new(self.template, self.providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hyper::header::{ALLOW, CACHE_CONTROL, CONTENT_TYPE};
    use hyper::{StatusCode, Uri};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vitals_core::{DetailEntry, Error, Result};

    struct Fixed(Details);

    #[async_trait]
    impl DetailsProvider for Fixed {
        async fn health_details(&self) -> Result<Details> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl DetailsProvider for Failing {
        async fn health_details(&self) -> Result<Details> {
            Err(Error::provider("failing", "dependency unreachable"))
        }
    }

    struct Panicking;

    #[async_trait]
    impl DetailsProvider for Panicking {
        async fn health_details(&self) -> Result<Details> {
            panic!("provider bug")
        }
    }

    struct Private {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DetailsProvider for Private {
        async fn health_details(&self) -> Result<Details> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(single("secret", "private"))
        }

        fn authorize_health(&self, request: &RequestContext) -> bool {
            request.bearer_token() == Some("letmein")
        }
    }

    fn single(key: &str, id: &str) -> Details {
        let mut details = Details::new();
        details.insert(
            key.to_string(),
            vec![DetailEntry::new(Status::Pass).with_component_id(id)],
        );
        details
    }

    fn request(method: Method) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    }

    fn get() -> RequestContext {
        RequestContext::new(Method::GET, Uri::from_static("/health"))
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_no_providers_gives_empty_details() {
        let service = HealthService::builder(HealthReport::new(Status::Pass)).build();
        let response = service.handle(request(Method::GET)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "pass", "details": {}})
        );
    }

    #[tokio::test]
    async fn test_status_seed_is_reset_to_pass() {
        let template = HealthReport::new(Status::Fail)
            .with_version("1")
            .with_release_id("1.0.0-SNAPSHOT");
        let service = HealthService::new(template, Vec::new());

        let report = service.report(&get()).await;
        assert_eq!(report.status, Status::Pass);
        assert_eq!(report.version.as_deref(), Some("1"));
        assert_eq!(report.release_id.as_deref(), Some("1.0.0-SNAPSHOT"));
        assert_eq!(service.template().status, Status::Fail);
        assert_eq!(service.template().details, None);
    }

    #[tokio::test]
    async fn test_providers_merge_in_registration_order() {
        let service = HealthService::builder(HealthReport::new(Status::Pass))
            .provider(Fixed(single("uptime", "system")))
            .provider(Fixed(single("db", "primary")))
            .provider(Fixed(single("uptime", "process")))
            .build();

        let details = service.report(&get()).await.details.unwrap();
        let uptime: Vec<_> = details["uptime"]
            .iter()
            .map(|e| e.component_id.clone().unwrap())
            .collect();
        assert_eq!(uptime, ["system", "process"]);
        assert_eq!(details["db"].len(), 1);
    }

    #[tokio::test]
    async fn test_failing_provider_is_omitted() {
        let service = HealthService::builder(HealthReport::new(Status::Pass))
            .provider(Fixed(single("db", "primary")))
            .provider(Failing)
            .provider(Fixed(single("cache", "redis")))
            .build();

        let details = service.report(&get()).await.details.unwrap();
        let keys: Vec<_> = details.keys().map(String::as_str).collect();
        assert_eq!(keys, ["db", "cache"]);
    }

    #[tokio::test]
    async fn test_panicking_provider_is_omitted() {
        let service = HealthService::builder(HealthReport::new(Status::Pass))
            .provider(Panicking)
            .provider(Fixed(single("db", "primary")))
            .build();

        let response = service.handle(request(Method::GET)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["details"]["db"][0]["componentId"], "primary");
    }

    #[tokio::test]
    async fn test_unauthorized_provider_is_not_queried() {
        let private = Arc::new(Private {
            calls: AtomicUsize::new(0),
        });
        let service = HealthService::builder(HealthReport::new(Status::Pass))
            .shared_provider(private.clone())
            .build();

        let anonymous = service.report(&get()).await;
        assert!(anonymous.details.unwrap().is_empty());
        assert_eq!(private.calls.load(Ordering::SeqCst), 0);

        let mut req = request(Method::GET);
        req.headers_mut()
            .insert("authorization", "Bearer letmein".parse().unwrap());
        let body = body_json(service.handle(req).await).await;
        assert_eq!(body["details"]["secret"][0]["componentId"], "private");
        assert_eq!(private.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_options_is_preflight() {
        let service = HealthService::builder(HealthReport::new(Status::Pass))
            .provider(Failing)
            .build();

        let response = service.handle(request(Method::OPTIONS)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ALLOW], "OPTIONS, GET, HEAD");
        assert_eq!(response.headers()[CACHE_CONTROL], "max-age=604800");
        assert_eq!(response.headers()[CONTENT_TYPE], "application/health+json");
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        let service = HealthService::builder(HealthReport::new(Status::Pass)).build();

        for method in [
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::TRACE,
            Method::CONNECT,
        ] {
            let response = service.handle(request(method.clone())).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
            assert_eq!(response.headers()[CONTENT_TYPE], "application/health+json");
            let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
            assert!(bytes.is_empty(), "{method}");
        }
    }

    #[tokio::test]
    async fn test_head_matches_get_headers() {
        let service = HealthService::builder(HealthReport::new(Status::Pass).with_version("2"))
            .provider(Fixed(single("db", "primary")))
            .build();

        let get = service.handle(request(Method::GET)).await;
        let head = service.handle(request(Method::HEAD)).await;
        assert_eq!(head.status(), get.status());
        assert_eq!(head.headers(), get.headers());
    }

    #[tokio::test]
    async fn test_fail_details_still_answer_200() {
        let mut details = Details::new();
        details.insert(
            "db".to_string(),
            vec![DetailEntry::new(Status::Fail).with_output("connection refused")],
        );
        let service = HealthService::builder(HealthReport::new(Status::Pass))
            .provider(Fixed(details))
            .build();

        let response = service.handle(request(Method::GET)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "pass");
        assert_eq!(body["details"]["db"][0]["status"], "fail");
    }

    #[tokio::test]
    async fn test_consecutive_reports_are_equal() {
        let service = HealthService::builder(HealthReport::new(Status::Pass).with_service_id("svc"))
            .provider(Fixed(single("db", "primary")))
            .build();

        let first = service.report(&get()).await;
        let second = service.report(&get()).await;
        assert_eq!(first, second);
    }
}
