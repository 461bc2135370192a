//! Pluggable plan providers.
//!
//! A [`PlanProvider`] is an alternative source of plans with the same
//! input/output shape as the local generator, such as a remote service.
//! Provider failures are never surfaced to callers; the local rule-based
//! generator always serves as the fallback.

use log::warn;

use super::{generate, GenerateRequest, GeneratedPlan};
use crate::error::Result;

/// A source of generated plans.
pub trait PlanProvider: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Produce a plan for the request.
    fn generate(&self, request: &GenerateRequest) -> Result<GeneratedPlan>;
}

/// The built-in provider backed by the local rule-based generator.
#[derive(Debug, Default)]
pub struct RuleBasedProvider;

impl PlanProvider for RuleBasedProvider {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn generate(&self, request: &GenerateRequest) -> Result<GeneratedPlan> {
        generate(request)
    }
}

/// Generate a plan, preferring the given provider when present.
///
/// A provider failure logs a warning and falls back to the local
/// generator. Errors from the local generator itself (invalid input)
/// still propagate.
pub fn generate_with_fallback(
    provider: Option<&dyn PlanProvider>,
    request: &GenerateRequest,
) -> Result<GeneratedPlan> {
    if let Some(provider) = provider {
        match provider.generate(request) {
            Ok(plan) => return Ok(plan),
            Err(err) => {
                warn!(
                    "plan provider '{}' failed, falling back to rule-based generation: {err}",
                    provider.name()
                );
            }
        }
    }

    generate(request)
}
