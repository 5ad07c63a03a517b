use std::sync::Arc;
use tracing::debug;

use crate::{
    detect::detect,
    normalize::normalize_reply,
    oracle::Oracle,
    types::{ConversionRequest, ConversionResult, Language},
};

const SYSTEM_PROMPT: &str = "You are an expert programmer who converts code between \
programming languages. Follow these rules:\n\
1. Preserve the exact behavior of the original code.\n\
2. Use proper syntax and conventions for the target language.\n\
3. Add any imports or headers the target language needs.\n\
4. Keep the same logic flow and structure.\n\
5. Return only the converted code, with no explanations or markdown.";

/// Builds translation prompts and drives the oracle.
///
/// Every failure mode folds into a `ConversionResult` with `succeeded = false`;
/// callers never see an `Err` from `convert`.
pub struct Converter {
    oracle: Arc<dyn Oracle>,
}

impl Converter {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    pub async fn convert(&self, request: ConversionRequest) -> ConversionResult {
        if request.source_text.trim().is_empty() {
            return ConversionResult::failed(request.source_language, "Source code is empty");
        }

        if !request.target_language.is_convertible() {
            return ConversionResult::failed(
                request.source_language,
                "Target language must be Python, C++, Java, or JavaScript",
            );
        }

        let source = if request.source_language == Language::Unknown {
            detect(&request.source_text)
        } else {
            request.source_language
        };

        if source == Language::Unknown {
            return ConversionResult::failed(
                Language::Unknown,
                "Could not detect the source language; declare it explicitly",
            );
        }

        // Same-language request is a no-op passthrough.
        if source == request.target_language {
            return ConversionResult::completed(source, request.source_text);
        }

        debug!(
            "Converting {} -> {} ({} bytes)",
            source,
            request.target_language,
            request.source_text.len()
        );

        let prompt = build_prompt(source, request.target_language, &request.source_text);
        match self.oracle.translate(SYSTEM_PROMPT, &prompt).await {
            Ok(reply) => ConversionResult::completed(source, normalize_reply(&reply)),
            Err(e) => ConversionResult::failed(source, e.to_string()),
        }
    }
}

fn build_prompt(source: Language, target: Language, code: &str) -> String {
    format!(
        "Convert this {source} code to {target}:\n\n\
         {code}\n\n\
         Convert to {target} with:\n\
         - Same functionality and logic\n\
         - Proper {target} syntax\n\
         - Appropriate imports or headers\n\
         - Idiomatic {target} style\n\n\
         Return only the {target} code:"
    )
}
