use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::client::TextGenerator;
use crate::config::API_KEY_ENV;
use crate::error::ApiError;
use crate::metrics::{FALLBACK_TOTAL, GENERATION_LATENCY, INVALID_SCENARIO_TOTAL};
use crate::models::ExplainRequest;
use crate::scenario::Scenario;

pub struct ExplanationService {
    generator: Arc<dyn TextGenerator>,
}

impl ExplanationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    // only an unknown scenario is an error, generation failures become fallback text
    pub async fn explain(&self, req: &ExplainRequest) -> Result<String, ApiError> {
        let tag = match &req.scenario {
            Some(Value::String(tag)) => tag.as_str(),
            _ => "",
        };
        let scenario = match tag.parse::<Scenario>() {
            Ok(s) => s,
            Err(e) => {
                INVALID_SCENARIO_TOTAL.inc();
                tracing::debug!(scenario = ?req.scenario, "rejecting unknown scenario");
                return Err(e);
            }
        };

        let prompt = scenario.build_prompt(&req.inputs, &req.results);
        tracing::info!(%scenario, prompt_len = prompt.len(), "generating explanation");

        let start_time = Instant::now();
        let result = self.generator.generate(&prompt).await;
        GENERATION_LATENCY.observe(start_time.elapsed().as_secs_f64());

        match result {
            Ok(text) => Ok(text),
            Err(e) => {
                FALLBACK_TOTAL.inc();
                tracing::warn!(%scenario, error = %e, "generation failed, serving fallback");
                Ok(fallback_explanation(
                    scenario,
                    req.inputs.len(),
                    req.results.len(),
                    &e.to_string(),
                ))
            }
        }
    }
}

// canned summary used when the generation service is unavailable
pub fn fallback_explanation(
    scenario: Scenario,
    input_count: usize,
    result_count: usize,
    error: &str,
) -> String {
    format!(
        "
AI Explanation Service Temporarily Unavailable: {error}

The calculation has been completed successfully with the provided parameters.
Here's a basic summary of the results:

Scenario: {name}
Input Parameters: {input_count} parameters provided
Calculated Results: {result_count} results generated

For detailed explanations of the methodology and significance of these calculations,
please refer to your course materials or contact your instructor.

Note: To enable AI-powered explanations, please configure the Google AI Studio API key
in the environment variables ({API_KEY_ENV}).
",
        name = scenario.display_name(),
    )
}
