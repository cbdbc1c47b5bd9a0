//! Wire types for the generation backend
//!
//! Requests serialize to the camelCase JSON the backend expects. Responses are
//! decoded exactly once, here, into either a typed success or an
//! [`ApiFailure`]; nothing above this module looks at raw JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sdxs_core::RefinerKind;

use crate::failure::{ApiFailure, ApiResult};

// ─────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────

/// `POST /api/model/prepare`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareModelRequest {
    pub model_card_url: String,
}

impl PrepareModelRequest {
    pub fn new(model_card_url: impl Into<String>) -> Self {
        Self {
            model_card_url: model_card_url.into(),
        }
    }
}

/// `POST /api/generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub size: String,
    pub steps: u32,
    pub guidance: f32,
}

impl GenerateRequest {
    pub const DEFAULT_SIZE: &'static str = "512x512";
    pub const DEFAULT_STEPS: u32 = 8;
    pub const DEFAULT_GUIDANCE: f32 = 4.0;

    /// Request with the fixed generation defaults
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: Self::DEFAULT_SIZE.to_string(),
            steps: Self::DEFAULT_STEPS,
            guidance: Self::DEFAULT_GUIDANCE,
        }
    }
}

/// `POST /api/refiner/prepare`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRefinerRequest {
    pub model_card_url: String,
    pub model_type: RefinerKind,
}

impl PrepareRefinerRequest {
    /// Build a preparation request for a variant that needs one.
    ///
    /// Returns `None` for the default variant, which has nothing to fetch.
    pub fn for_kind(kind: RefinerKind) -> Option<Self> {
        kind.model_card_url().map(|url| Self {
            model_card_url: url.to_string(),
            model_type: kind,
        })
    }
}

/// `POST /api/refiner/refine`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub original_image_filename: String,
    pub refinement_prompt: String,
    pub model_type: RefinerKind,
    pub strength: f32,
    pub steps: u32,
    pub guidance: f32,
}

impl RefineRequest {
    pub const DEFAULT_STRENGTH: f32 = 0.75;
    pub const DEFAULT_STEPS: u32 = 20;
    pub const DEFAULT_GUIDANCE: f32 = 7.5;

    /// Request with the fixed refinement defaults
    pub fn new(
        original_image_filename: impl Into<String>,
        refinement_prompt: impl Into<String>,
        model_type: RefinerKind,
    ) -> Self {
        Self {
            original_image_filename: original_image_filename.into(),
            refinement_prompt: refinement_prompt.into(),
            model_type,
            strength: Self::DEFAULT_STRENGTH,
            steps: Self::DEFAULT_STEPS,
            guidance: Self::DEFAULT_GUIDANCE,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPrepared {
    pub message: String,
    #[serde(default)]
    pub repo_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerated {
    /// Path relative to the backend base URL, e.g. `/api/images/abc.png`
    pub image_path: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinerPrepared {
    pub message: String,
    #[serde(default)]
    pub model_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRefined {
    pub refined_image_path: String,
    pub filename: String,
}

/// Body of `GET /api/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendInfo {
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────

/// Pull a displayable `detail` out of an error body.
///
/// String details are returned verbatim; structured ones (FastAPI validation
/// errors are arrays) are rendered as compact JSON.
pub fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode an action response into its success type or a failure.
///
/// Success requires a 2xx status and `ok: true`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        let detail = parsed
            .as_ref()
            .and_then(extract_detail)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        return Err(ApiFailure::backend(Some(status), detail));
    }

    let value = parsed.ok_or_else(|| ApiFailure::malformed("Backend returned invalid JSON"))?;

    if value.get("ok").and_then(Value::as_bool) != Some(true) {
        let detail = extract_detail(&value)
            .or_else(|| {
                value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Backend reported failure".to_string());
        return Err(ApiFailure::backend(Some(status), detail));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiFailure::malformed(format!("Unexpected response shape: {}", e)))
}

/// Decode the `GET /api/` probe, which carries no `ok` field.
pub fn decode_probe(status: u16, body: &str) -> ApiResult<BackendInfo> {
    if !(200..300).contains(&status) {
        return Err(ApiFailure::backend(
            Some(status),
            format!("Request failed with status code {}", status),
        ));
    }
    serde_json::from_str(body)
        .map_err(|e| ApiFailure::malformed(format!("Unexpected response shape: {}", e)))
}

/// Resolve a backend-relative asset path against the base URL.
///
/// Plain concatenation: `http://host:1234` + `/images/foo.png`.
pub fn resolve_asset_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureKind;

    #[test]
    fn test_generate_request_wire_shape() {
        let json = serde_json::to_value(GenerateRequest::new("a cat")).unwrap();
        assert_eq!(json["prompt"], "a cat");
        assert_eq!(json["size"], "512x512");
        assert_eq!(json["steps"], 8);
        assert_eq!(json["guidance"], 4.0);
    }

    #[test]
    fn test_refine_request_wire_shape() {
        let req = RefineRequest::new("abc.png", "more detail", RefinerKind::SmallSdV0);
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(json["originalImageFilename"], "abc.png");
        assert_eq!(json["refinementPrompt"], "more detail");
        assert_eq!(json["modelType"], "small-sd-v0");
        assert_eq!(json["strength"], 0.75);
        assert_eq!(json["steps"], 20);
        assert_eq!(json["guidance"], 7.5);
    }

    #[test]
    fn test_prepare_requests_use_camel_case() {
        let json = serde_json::to_value(PrepareModelRequest::new("https://hf.co/x")).unwrap();
        assert_eq!(json["modelCardUrl"], "https://hf.co/x");

        let req = PrepareRefinerRequest::for_kind(RefinerKind::SmallSdV0).unwrap();
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(
            json["modelCardUrl"],
            "https://huggingface.co/OFA-Sys/small-stable-diffusion-v0"
        );
        assert_eq!(json["modelType"], "small-sd-v0");
    }

    #[test]
    fn test_default_refiner_needs_no_preparation() {
        assert!(PrepareRefinerRequest::for_kind(RefinerKind::Sdxs).is_none());
    }

    #[test]
    fn test_decode_success() {
        let body = r#"{"ok":true,"imagePath":"/api/images/a.png","filename":"a.png"}"#;
        let decoded: ImageGenerated = decode_response(200, body).unwrap();
        assert_eq!(decoded.image_path, "/api/images/a.png");
        assert_eq!(decoded.filename, "a.png");
    }

    #[test]
    fn test_decode_error_status_uses_detail() {
        let failure = decode_response::<ModelPrepared>(500, r#"{"detail":"model not found"}"#)
            .unwrap_err();
        assert_eq!(failure.detail, "model not found");
        assert_eq!(failure.kind, FailureKind::Backend { status: Some(500) });
    }

    #[test]
    fn test_decode_error_status_without_detail() {
        let failure = decode_response::<ModelPrepared>(502, "Bad Gateway").unwrap_err();
        assert_eq!(failure.detail, "Request failed with status code 502");
    }

    #[test]
    fn test_structured_detail_is_compact_json() {
        let body = r#"{"detail":[{"loc":["body","prompt"],"msg":"field required"}]}"#;
        let failure = decode_response::<ImageGenerated>(422, body).unwrap_err();
        assert_eq!(
            failure.detail,
            r#"[{"loc":["body","prompt"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn test_ok_false_is_failure() {
        let failure =
            decode_response::<ModelPrepared>(200, r#"{"ok":false,"message":"busy"}"#).unwrap_err();
        assert_eq!(failure.detail, "busy");

        let failure = decode_response::<ModelPrepared>(200, r#"{"message":"no ok"}"#).unwrap_err();
        assert!(failure.is_from_backend());

        let failure = decode_response::<ModelPrepared>(200, r#"{"ok":false}"#).unwrap_err();
        assert_eq!(failure.detail, "Backend reported failure");
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let failure = decode_response::<ImageGenerated>(200, r#"{"ok":true}"#).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Malformed);

        let failure = decode_response::<ImageGenerated>(200, "not json").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Malformed);
    }

    #[test]
    fn test_decode_probe() {
        let info =
            decode_probe(200, r#"{"message":"SD-XS Local Image Generation API"}"#).unwrap();
        assert_eq!(info.message, "SD-XS Local Image Generation API");
        assert!(decode_probe(404, "").is_err());
    }

    #[test]
    fn test_resolve_asset_url() {
        assert_eq!(
            resolve_asset_url("http://host:1234", "/images/foo.png"),
            "http://host:1234/images/foo.png"
        );
        assert_eq!(
            resolve_asset_url("http://host:1234/", "/images/foo.png"),
            "http://host:1234/images/foo.png"
        );
    }
}
