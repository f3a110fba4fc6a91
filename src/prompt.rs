use anyhow::Context;

pub const DEFAULT_PROMPT_TEMPLATE: &str = "Classify the following text as YES or NO based on relevance to civil services exam preparation: {text}\n\nAnswer:";

const TEXT_PLACEHOLDER: &str = "{text}";

/// Instruction text sent to the model, with the article's text substituted
/// in for the `{text}` placeholder. Fixed for the duration of a run.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new<S: Into<String>>(template: S) -> crate::Result<Self> {
        let template = template.into();
        if !template.contains(TEXT_PLACEHOLDER) {
            crate::bail!(
                "prompt template is missing the required '{}' placeholder",
                TEXT_PLACEHOLDER
            );
        }
        Ok(Self { template })
    }

    /// Loads the template from an operator-edited file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let template = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt template file {}", path.display()))?;
        Self::new(template)
    }

    pub fn render(&self, article_text: &str) -> String {
        self.template.replace(TEXT_PLACEHOLDER, article_text)
    }
}
