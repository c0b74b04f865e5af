use crate::errors::EngineerResult;
use crate::structs::review_result::ReviewResult;

const MIN_FENCE_BACKTICKS: usize = 3;
const SECTION_DIVIDER: &str = "---";

pub struct ReviewRenderer;

impl ReviewRenderer {
    /// Pretty JSON, the same payload the web UI offers for download.
    pub fn to_json(result: &ReviewResult) -> EngineerResult<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    /// Markdown rendering of a review, code blocks tagged with `language`.
    pub fn to_markdown(result: &ReviewResult, language: &str) -> String {
        let mut output = String::new();

        output.push_str("## Summary\n\n");
        output.push_str(result.summary.trim());
        output.push_str("\n\n");

        output.push_str("## Design flaws\n\n");
        if result.design_flaws.is_empty() {
            output.push_str("_No flaws listed._\n\n");
        }
        for flaw in &result.design_flaws {
            output.push_str(&format!(
                "**[{}] {}**\n\n",
                flaw.severity.as_str().to_uppercase(),
                flaw.title
            ));
            Self::push_paragraph(&mut output, &flaw.why_it_matters);
            Self::push_code_block(&mut output, &flaw.evidence, language);
            output.push_str(&format!("**Fix:** {}\n\n{SECTION_DIVIDER}\n\n", flaw.fix.trim()));
        }

        output.push_str("## Tests\n\n");
        if result.tests.is_empty() {
            output.push_str("_No tests listed._\n\n");
        }
        for test in &result.tests {
            output.push_str(&format!("**({}) {}**\n\n", test.kind, test.title));
            Self::push_paragraph(&mut output, &test.what_to_test);
            Self::push_code_block(&mut output, &test.example_test_code, language);
            output.push_str(&format!("{SECTION_DIVIDER}\n\n"));
        }

        output.push_str("## Refactor patch\n\n");
        if result.refactor.is_empty() {
            output.push_str("_No refactor proposed._\n\n");
        }
        if !result.refactor.goals.is_empty() {
            output.push_str("Goals:\n\n");
            for goal in &result.refactor.goals {
                output.push_str(&format!("- {goal}\n"));
            }
            output.push('\n');
        }
        if !result.refactor.patch.trim().is_empty() {
            Self::push_code_block(&mut output, &result.refactor.patch, language);
        }

        if let Some(error) = &result.error {
            output.push_str(&format!("> ⚠️ Review issue ({}): {}\n\n", error.code, error.message));
            if let Some(raw) = &error.raw {
                output.push_str("Raw output:\n\n");
                Self::push_code_block(&mut output, raw, "");
            }
        }

        output.trim_end().to_string()
    }

    fn push_paragraph(output: &mut String, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            output.push_str(text);
            output.push_str("\n\n");
        }
    }

    fn push_code_block(output: &mut String, code: &str, language: &str) {
        let fence = Self::fence_for(code);
        output.push_str(&format!("{fence}{language}\n{}\n{fence}\n\n", code.trim_end()));
    }

    /// Fence long enough not to be closed by a backtick run inside `content`.
    fn fence_for(content: &str) -> String {
        let longest_run = content
            .as_bytes()
            .split(|&b| b != b'`')
            .map(<[u8]>::len)
            .max()
            .unwrap_or(0);
        "`".repeat((longest_run + 1).max(MIN_FENCE_BACKTICKS))
    }
}
