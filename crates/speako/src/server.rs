//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes transcript assessment over the MCP protocol via stdio transport,
//! so an assistant can score a learner's speech without shelling out to the
//! CLI.
//!
//! Each `#[tool]` method delegates to `speako_core`; no analysis logic lives
//! here.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use speako_core::{Transcript, Word, assessment, metrics, wer};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_transcript` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTranscriptParams {
    /// The transcript text.
    pub text: String,
    /// Optional time-aligned words with ASR confidence.
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Parameters for the `compute_metrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ComputeMetricsParams {
    /// The transcript text.
    pub text: String,
    /// Optional time-aligned words with ASR confidence.
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Parameters for the `calculate_wer` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CalculateWerParams {
    /// Ground-truth transcript.
    pub reference: String,
    /// Recognizer output.
    pub hypothesis: String,
}

/// MCP server exposing speako's assessment tools.
#[derive(Clone)]
pub struct SpeakoServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for SpeakoServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl SpeakoServer {
    /// Create a server with no input size limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: None,
        }
    }

    /// Reject tool inputs larger than `max` bytes.
    #[must_use]
    pub const fn with_input_limit(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    fn check_size(&self, texts: &[&str]) -> Result<(), McpError> {
        let size: usize = texts.iter().map(|t| t.len()).sum();
        match self.max_input_bytes {
            Some(max) if size > max => Err(McpError::invalid_params(
                format!("input too large: {size} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full assessment of a transcript.
    #[tool(
        description = "Assess a spoken-English transcript. Returns issues with offsets, a clarity score (0-100), praise, lexical metrics and a CEFR level (A1-C2)."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn analyze_transcript(
        &self,
        Parameters(params): Parameters<AnalyzeTranscriptParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_transcript",
            words = params.words.len(),
            "executing MCP tool"
        );
        self.check_size(&[&params.text])?;

        let transcript = Transcript {
            text: params.text,
            words: params.words,
        };
        let report = assessment::assess(&transcript, None);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_transcript",
            clarity = report.analysis.clarity_score,
            level = %report.cefr.level,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Lexical metrics only.
    #[tool(
        description = "Compute lexical metrics for a transcript: word counts, unique and complex words, sentence length, CEFR estimate and, with word timings, pronunciation and speaking rate."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn compute_metrics(
        &self,
        Parameters(params): Parameters<ComputeMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compute_metrics", "executing MCP tool");
        self.check_size(&[&params.text])?;

        let words = (!params.words.is_empty()).then_some(params.words.as_slice());
        let report = metrics::compute_metrics(&params.text, words);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "compute_metrics",
            word_count = report.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Word error rate.
    #[tool(
        description = "Calculate Word Error Rate of a hypothesis transcript against a reference. Case and punctuation are ignored."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn calculate_wer(
        &self,
        Parameters(params): Parameters<CalculateWerParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "calculate_wer", "executing MCP tool");
        self.check_size(&[&params.reference, &params.hypothesis])?;

        let breakdown = wer::align(&params.reference, &params.hypothesis);
        let json = to_json(&breakdown)?;

        tracing::info!(tool = "calculate_wer", wer = breakdown.wer, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for SpeakoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_transcript for full feedback on a learner's speech, \
                 compute_metrics for vocabulary statistics and calculate_wer to score a recognizer.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
