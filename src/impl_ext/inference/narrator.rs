use async_trait::async_trait;

use crate::{entities::VisitAnalysis, errors::ReportError};

use super::{config::InferenceConfig, prompt::build_insight_prompt};

const GENERATED_CONFIDENCE: f64 = 0.9;
const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Contract of the text-generation collaborator.
#[async_trait]
pub trait TextGenerationDatasource: Send + Sync {
    async fn generate(
        &self,
        config: &InferenceConfig,
        prompt: &str,
    ) -> Result<String, ReportError>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrationSource {
    Generated,
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct Narration {
    pub text: String,
    pub confidence: f64,
    pub source: NarrationSource,
}

/// Produces a prose summary of an aggregation run. Endpoint failures of any
/// kind degrade to a deterministic local summary with a lower confidence
/// score; this call never fails the enclosing operation.
pub struct InsightNarrator<DS: TextGenerationDatasource> {
    datasource: DS,
}

impl<DS: TextGenerationDatasource> InsightNarrator<DS> {
    pub fn new(datasource: DS) -> Self {
        Self { datasource }
    }

    pub async fn narrate(
        &self,
        config: &InferenceConfig,
        analysis: &VisitAnalysis,
    ) -> Narration {
        let prompt = match build_insight_prompt(analysis) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!(error = %e, "prompt build failed; using local summary");
                return local_summary(analysis);
            }
        };
        match self.datasource.generate(config, &prompt).await {
            Ok(text) => Narration {
                text,
                confidence: GENERATED_CONFIDENCE,
                source: NarrationSource::Generated,
            },
            Err(e) => {
                tracing::warn!(error = %e, "text generation failed; using local summary");
                local_summary(analysis)
            }
        }
    }
}

/// Deterministic summary templated from the computed figures alone.
fn local_summary(analysis: &VisitAnalysis) -> Narration {
    let insights = &analysis.insights;
    let mut text = format!(
        "{} visits cost {:.2} in total ({:.2} per visit on average); cost efficiency is {}.",
        insights.total_visits,
        insights.total_spent,
        insights.average_per_visit,
        insights.cost_efficiency,
    );
    if let Some(top) = analysis.patterns.first() {
        text.push_str(&format!(
            " {} is the most visited location with {} visit(s).",
            top.location, top.visit_count
        ));
    }
    text.push_str(&format!(
        " Holding this pace, the projected annual cost is {:.2}.",
        insights.projected_annual_cost
    ));
    Narration {
        text,
        confidence: FALLBACK_CONFIDENCE,
        source: NarrationSource::LocalFallback,
    }
}
