use crate::model::ids::StageId;
use crate::model::task::{Step, Task};

/// Optional structured details of an informational section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDetails {
    pub steps: Vec<String>,
    /// `(item, amount)` pairs in the order the catalog lists them.
    pub costs: Vec<(String, String)>,
    pub warnings: Vec<String>,
}

/// Informational content attached to a stage. Not part of progress tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    description: String,
    details: Option<SectionDetails>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: SectionDetails) -> Self {
        self.details = Some(details);
        self
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
    pub fn details(&self) -> Option<&SectionDetails> {
        self.details.as_ref()
    }
}

/// Top-level phase in the guidance flow (formation, recording, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    id: StageId,
    title: String,
    description: String,
    tasks: Vec<Task>,
    sections: Vec<Section>,
}

impl Stage {
    #[must_use]
    pub fn new(
        id: StageId,
        title: impl Into<String>,
        description: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            tasks,
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn id(&self) -> &StageId {
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
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Iterate over every step of every task, in catalog order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.tasks.iter().flat_map(|task| task.steps().iter())
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.tasks.iter().map(|task| task.steps().len()).sum()
    }
}
