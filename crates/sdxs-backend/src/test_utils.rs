//! Test helpers for exercising code that talks to a [`Backend`]
//!
//! Available in this crate's tests and, with the `test-helpers` feature, to
//! downstream crates' tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::Backend;
use crate::failure::ApiResult;
use crate::protocol::{
    BackendInfo, GenerateRequest, ImageGenerated, ImageRefined, ModelPrepared,
    PrepareModelRequest, PrepareRefinerRequest, RefineRequest, RefinerPrepared,
};

/// One recorded call against a [`MockBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    PrepareModel(PrepareModelRequest),
    Generate(GenerateRequest),
    PrepareRefiner(PrepareRefinerRequest),
    Refine(RefineRequest),
    Probe,
}

#[derive(Debug)]
struct MockState {
    calls: Vec<BackendCall>,
    prepare_model: ApiResult<ModelPrepared>,
    generate: ApiResult<ImageGenerated>,
    prepare_refiner: ApiResult<RefinerPrepared>,
    refine: ApiResult<ImageRefined>,
    probe: ApiResult<BackendInfo>,
    delay: Option<Duration>,
    panic_message: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            prepare_model: Ok(ModelPrepared {
                message: "Model IDKiro/sdxs-512-0.9 loaded successfully".to_string(),
                repo_id: Some("IDKiro/sdxs-512-0.9".to_string()),
            }),
            generate: Ok(ImageGenerated {
                image_path: "/api/images/mock.png".to_string(),
                filename: "mock.png".to_string(),
            }),
            prepare_refiner: Ok(RefinerPrepared {
                message: "Small SD V0 refiner loaded successfully".to_string(),
                model_type: Some("small-sd-v0".to_string()),
            }),
            refine: Ok(ImageRefined {
                refined_image_path: "/api/images/mock_refined.png".to_string(),
                filename: "mock_refined.png".to_string(),
            }),
            probe: Ok(BackendInfo {
                message: "SD-XS Local Image Generation API".to_string(),
            }),
            delay: None,
            panic_message: None,
        }
    }
}

/// Scripted in-memory backend that records every call.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prepare_model(self, result: ApiResult<ModelPrepared>) -> Self {
        self.state.lock().unwrap().prepare_model = result;
        self
    }

    pub fn with_generate(self, result: ApiResult<ImageGenerated>) -> Self {
        self.state.lock().unwrap().generate = result;
        self
    }

    pub fn with_prepare_refiner(self, result: ApiResult<RefinerPrepared>) -> Self {
        self.state.lock().unwrap().prepare_refiner = result;
        self
    }

    pub fn with_refine(self, result: ApiResult<ImageRefined>) -> Self {
        self.state.lock().unwrap().refine = result;
        self
    }

    pub fn with_probe(self, result: ApiResult<BackendInfo>) -> Self {
        self.state.lock().unwrap().probe = result;
        self
    }

    /// Delay every call by `delay` before answering
    pub fn with_delay(self, delay: Duration) -> Self {
        self.state.lock().unwrap().delay = Some(delay);
        self
    }

    /// Make every call panic with `message` (after recording it)
    pub fn panicking(self, message: impl Into<String>) -> Self {
        self.state.lock().unwrap().panic_message = Some(message.into());
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Record `call`, then wait and/or panic as scripted
    async fn enter(&self, call: BackendCall) {
        let (delay, panic_message) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            (state.delay, state.panic_message.clone())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = panic_message {
            panic!("{}", message);
        }
    }
}

impl Backend for MockBackend {
    async fn prepare_model(&self, request: PrepareModelRequest) -> ApiResult<ModelPrepared> {
        self.enter(BackendCall::PrepareModel(request)).await;
        self.state.lock().unwrap().prepare_model.clone()
    }

    async fn generate(&self, request: GenerateRequest) -> ApiResult<ImageGenerated> {
        self.enter(BackendCall::Generate(request)).await;
        self.state.lock().unwrap().generate.clone()
    }

    async fn prepare_refiner(
        &self,
        request: PrepareRefinerRequest,
    ) -> ApiResult<RefinerPrepared> {
        self.enter(BackendCall::PrepareRefiner(request)).await;
        self.state.lock().unwrap().prepare_refiner.clone()
    }

    async fn refine(&self, request: RefineRequest) -> ApiResult<ImageRefined> {
        self.enter(BackendCall::Refine(request)).await;
        self.state.lock().unwrap().refine.clone()
    }

    async fn probe(&self) -> ApiResult<BackendInfo> {
        self.enter(BackendCall::Probe).await;
        self.state.lock().unwrap().probe.clone()
    }
}
