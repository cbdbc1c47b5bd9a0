//! Backend client trait and its reqwest implementation

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use sdxs_core::prelude::*;

use crate::failure::{ApiFailure, ApiResult};
use crate::protocol::{
    decode_probe, decode_response, BackendInfo, GenerateRequest, ImageGenerated, ImageRefined,
    ModelPrepared, PrepareModelRequest, PrepareRefinerRequest, RefineRequest, RefinerPrepared,
};

/// Client-side deadline for the two inference calls (generate, refine).
///
/// The prepare calls carry no deadline; model downloads can take minutes.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Deadline for the startup reachability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Operations offered by the generation backend
///
/// The app layer is generic over this trait so handlers can be exercised
/// against `MockBackend` without a server.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Ask the backend to download and load a model from its card URL
    async fn prepare_model(&self, request: PrepareModelRequest) -> ApiResult<ModelPrepared>;

    /// Run text-to-image generation
    async fn generate(&self, request: GenerateRequest) -> ApiResult<ImageGenerated>;

    /// Load a non-default refiner pipeline
    async fn prepare_refiner(&self, request: PrepareRefinerRequest)
        -> ApiResult<RefinerPrepared>;

    /// Run image-to-image refinement over a previously generated image
    async fn refine(&self, request: RefineRequest) -> ApiResult<ImageRefined>;

    /// Check that the backend answers at all
    async fn probe(&self) -> ApiResult<BackendInfo>;
}

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    generation_timeout: Duration,
}

impl HttpBackend {
    /// Create a client for the backend at `base_url` (trailing slashes ignored)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("HTTP backend configured at {}", base_url);

        Ok(Self {
            client,
            base_url,
            generation_timeout: GENERATION_TIMEOUT,
        })
    }

    /// Replace the deadline applied to generate and refine
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, timeout: Option<Duration>) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(deadline) = timeout {
            request = request.timeout(deadline);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::from_reqwest(&e, timeout))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiFailure::from_reqwest(&e, timeout))?;

        let decoded = decode_response(status, &text);
        if let Err(ref failure) = decoded {
            warn!("POST {} failed ({}): {}", path, status, failure);
        }
        decoded
    }
}

impl Backend for HttpBackend {
    async fn prepare_model(&self, request: PrepareModelRequest) -> ApiResult<ModelPrepared> {
        info!("Preparing model from {}", request.model_card_url);
        self.post_json("/api/model/prepare", &request, None).await
    }

    async fn generate(&self, request: GenerateRequest) -> ApiResult<ImageGenerated> {
        info!(
            "Generating {} image ({} steps, guidance {})",
            request.size, request.steps, request.guidance
        );
        self.post_json("/api/generate", &request, Some(self.generation_timeout))
            .await
    }

    async fn prepare_refiner(
        &self,
        request: PrepareRefinerRequest,
    ) -> ApiResult<RefinerPrepared> {
        info!("Preparing refiner {}", request.model_type.id());
        self.post_json("/api/refiner/prepare", &request, None).await
    }

    async fn refine(&self, request: RefineRequest) -> ApiResult<ImageRefined> {
        info!(
            "Refining {} with {} (strength {})",
            request.original_image_filename,
            request.model_type.id(),
            request.strength
        );
        self.post_json("/api/refiner/refine", &request, Some(self.generation_timeout))
            .await
    }

    async fn probe(&self) -> ApiResult<BackendInfo> {
        let url = self.endpoint("/api/");
        let response = self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiFailure::from_reqwest(&e, Some(PROBE_TIMEOUT)))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiFailure::from_reqwest(&e, Some(PROBE_TIMEOUT)))?;
        decode_probe(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureKind;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = HttpBackend::new("http://localhost:8001/").unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8001");
        assert_eq!(
            backend.endpoint("/api/generate"),
            "http://localhost:8001/api/generate"
        );
    }

    #[test]
    fn test_generation_timeout_is_two_minutes() {
        assert_eq!(GENERATION_TIMEOUT.as_millis(), 120_000);

        let backend = HttpBackend::new("http://localhost:8001").unwrap();
        assert_eq!(backend.generation_timeout, GENERATION_TIMEOUT);
        let backend = backend.with_generation_timeout(Duration::from_millis(250));
        assert_eq!(backend.generation_timeout, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_failure() {
        // Grab a free port, then close it so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let backend = HttpBackend::new(format!("http://127.0.0.1:{}", port)).unwrap();
        let failure = Backend::prepare_model(
            &backend,
            PrepareModelRequest::new("https://huggingface.co/x/y"),
        )
        .await
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Transport);
        assert!(!failure.detail.is_empty());
    }
}
