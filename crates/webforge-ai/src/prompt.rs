//! Prompt construction for site generation.

/// Wraps the user's request with the generation instructions.
///
/// The instructions pin the model to the response contract: complete
/// HTML5, standalone CSS, working JavaScript, JSON only.
pub fn build_prompt(request: &str) -> String {
    format!(
        "As an expert front-end developer, create a simple web project for the following request.\n\
         Request: \"{request}\"\n\
         \n\
         Follow these rules:\n\
         1. Produce a complete, valid HTML5 document (doctype, html, head, body) in the 'html' field.\n\
         2. Produce modern, responsive CSS for that markup in the 'css' field.\n\
         3. Produce working, error-free JavaScript in the 'javascript' field.\n\
         4. Make sure all three parts fit together.\n\
         5. Respond with JSON only."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_request() {
        let prompt = build_prompt("a blue login page");
        assert!(prompt.contains("\"a blue login page\""));
        assert!(prompt.contains("JSON only"));
    }
}
