use crate::model::ids::{StepId, TaskId};

/// Illustrative contract text attached to a step.
///
/// `content` is an opaque formatted-text payload. The core never interprets
/// it; it is handed to the rendering boundary verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateExample {
    title: String,
    content: String,
}

impl TemplateExample {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The smallest trackable unit; completion is recorded per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: StepId,
    title: String,
    detail: String,
    warning: Option<String>,
    template: Option<TemplateExample>,
}

impl Step {
    #[must_use]
    pub fn new(id: StepId, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            detail: detail.into(),
            warning: None,
            template: None,
        }
    }

    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: TemplateExample) -> Self {
        self.template = Some(template);
        self
    }

    #[must_use]
    pub fn id(&self) -> &StepId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    #[must_use]
    pub fn template(&self) -> Option<&TemplateExample> {
        self.template.as_ref()
    }
}

/// A grouped unit of actionable work within a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: Option<String>,
    steps: Vec<Step>,
}

impl Task {
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            priority: None,
            steps,
        }
    }

    /// Attach a free-form priority label (e.g. "high").
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
