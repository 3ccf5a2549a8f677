//! Serialized shape of a catalog document.
//!
//! Records mirror the domain types so documents can be read and written
//! without leaking serde concerns into `guide-core`.

use guide_core::model::{
    Catalog, Section, SectionDetails, Stage, StageId, Step, StepId, Task, TaskId, TemplateExample,
};
use serde::{Deserialize, Serialize};

use crate::error::CatalogLoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub id: String,
    pub title: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_example: Option<TemplateRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDetailsRecord {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    #[serde(default, with = "cost_table", skip_serializing_if = "Vec::is_empty")]
    pub costs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Cost tables are JSON objects whose key order is the display order.
mod cost_table {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        entries: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(entries.iter().map(|(item, amount)| (item, amount)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        deserializer.deserialize_map(OrderedEntries)
    }

    struct OrderedEntries;

    impl<'de> Visitor<'de> for OrderedEntries {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of cost items to amounts")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<SectionDetailsRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_sections: Vec<SectionRecord>,
}

/// A whole catalog as it appears on disk: an ordered array of stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDocument {
    pub stages: Vec<StageRecord>,
}

impl CatalogDocument {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError::Parse` if the JSON does not match the schema.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogLoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError::Parse` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, CatalogLoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            stages: catalog.stages().iter().map(StageRecord::from_stage).collect(),
        }
    }

    /// Convert the document into a validated domain catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError::InvalidId` for blank identifiers and
    /// `CatalogLoadError::Invalid` when the catalog fails validation.
    pub fn into_catalog(self) -> Result<Catalog, CatalogLoadError> {
        let stages = self
            .stages
            .into_iter()
            .map(StageRecord::into_stage)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(stages)?)
    }
}

impl StageRecord {
    #[must_use]
    pub fn from_stage(stage: &Stage) -> Self {
        Self {
            id: stage.id().to_string(),
            title: stage.title().to_owned(),
            description: stage.description().to_owned(),
            tasks: stage.tasks().iter().map(TaskRecord::from_task).collect(),
            content_sections: stage
                .sections()
                .iter()
                .map(SectionRecord::from_section)
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `CatalogLoadError::InvalidId` if any identifier is blank.
    pub fn into_stage(self) -> Result<Stage, CatalogLoadError> {
        let tasks = self
            .tasks
            .into_iter()
            .map(TaskRecord::into_task)
            .collect::<Result<Vec<_>, _>>()?;
        let sections = self
            .content_sections
            .into_iter()
            .map(SectionRecord::into_section)
            .collect();
        Ok(Stage::new(StageId::new(&self.id)?, self.title, self.description, tasks)
            .with_sections(sections))
    }
}

impl TaskRecord {
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority().map(str::to_owned),
            steps: task.steps().iter().map(StepRecord::from_step).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `CatalogLoadError::InvalidId` if any identifier is blank.
    pub fn into_task(self) -> Result<Task, CatalogLoadError> {
        let steps = self
            .steps
            .into_iter()
            .map(StepRecord::into_step)
            .collect::<Result<Vec<_>, _>>()?;
        let task = Task::new(TaskId::new(&self.id)?, self.title, self.description, steps);
        Ok(match self.priority {
            Some(priority) => task.with_priority(priority),
            None => task,
        })
    }
}

impl StepRecord {
    #[must_use]
    pub fn from_step(step: &Step) -> Self {
        Self {
            id: step.id().to_string(),
            title: step.title().to_owned(),
            detail: step.detail().to_owned(),
            warning: step.warning().map(str::to_owned),
            template_example: step.template().map(|template| TemplateRecord {
                title: template.title().to_owned(),
                content: template.content().to_owned(),
            }),
        }
    }

    /// # Errors
    ///
    /// Returns `CatalogLoadError::InvalidId` if the identifier is blank.
    pub fn into_step(self) -> Result<Step, CatalogLoadError> {
        let mut step = Step::new(StepId::new(&self.id)?, self.title, self.detail);
        if let Some(warning) = self.warning {
            step = step.with_warning(warning);
        }
        if let Some(template) = self.template_example {
            step = step.with_template(TemplateExample::new(template.title, template.content));
        }
        Ok(step)
    }
}

impl SectionRecord {
    #[must_use]
    pub fn from_section(section: &Section) -> Self {
        Self {
            title: section.title().to_owned(),
            description: section.description().to_owned(),
            details: section.details().map(|details| SectionDetailsRecord {
                steps: details.steps.clone(),
                costs: details.costs.clone(),
                warnings: details.warnings.clone(),
            }),
        }
    }

    #[must_use]
    pub fn into_section(self) -> Section {
        let section = Section::new(self.title, self.description);
        match self.details {
            Some(details) => section.with_details(SectionDetails {
                steps: details.steps,
                costs: details.costs,
                warnings: details.warnings,
            }),
            None => section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"[
      {
        "id": "formation",
        "title": "Band Formation",
        "description": "Set up the band",
        "tasks": [
          {
            "id": "band-name",
            "title": "Protect the name",
            "description": "",
            "priority": "high",
            "steps": [
              { "id": "name-search", "title": "Search", "detail": "Search registers" },
              {
                "id": "basic-agreement",
                "title": "Agreement",
                "detail": "Sign it",
                "warning": "Do it early",
                "templateExample": { "title": "Band Agreement", "content": "**Parties**" }
              }
            ]
          }
        ],
        "contentSections": [
          {
            "title": "Costs",
            "description": "Typical fees",
            "details": { "costs": { "Trademark filing": "$250" }, "warnings": ["Fees change"] }
          }
        ]
      }
    ]"#;

    #[test]
    fn parses_camel_case_document() {
        let doc = CatalogDocument::from_json_str(DOCUMENT).unwrap();
        let catalog = doc.into_catalog().unwrap();

        assert_eq!(catalog.step_count(), 2);
        let stage = catalog.first_stage();
        assert_eq!(stage.tasks()[0].priority(), Some("high"));

        let agreement = catalog
            .step(&StepId::new("basic-agreement").unwrap())
            .unwrap();
        assert_eq!(agreement.warning(), Some("Do it early"));
        assert_eq!(agreement.template().map(TemplateExample::content), Some("**Parties**"));

        let details = stage.sections()[0].details().unwrap();
        assert_eq!(details.costs, vec![("Trademark filing".to_owned(), "$250".to_owned())]);
        assert!(details.steps.is_empty());
    }

    #[test]
    fn document_survives_domain_conversion() {
        let doc = CatalogDocument::from_json_str(DOCUMENT).unwrap();
        let catalog = doc.clone().into_catalog().unwrap();
        assert_eq!(CatalogDocument::from_catalog(&catalog), doc);
    }

    #[test]
    fn blank_ids_and_duplicates_are_reported() {
        let blank = CatalogDocument::from_json_str(
            r#"[{ "id": " ", "title": "t", "description": "d" }]"#,
        )
        .unwrap();
        assert!(matches!(blank.into_catalog(), Err(CatalogLoadError::InvalidId(_))));

        let empty = CatalogDocument::from_json_str("[]").unwrap();
        assert!(matches!(empty.into_catalog(), Err(CatalogLoadError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CatalogDocument::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn cost_table_keeps_authored_order() {
        let raw = r#"[{
          "id": "merch",
          "title": "Merchandise",
          "description": "Sell things",
          "contentSections": [{
            "title": "Costs",
            "description": "Fees",
            "details": { "costs": { "Search": "$0", "Filing": "$350", "Attorney": "$500" } }
          }]
        }]"#;
        let doc = CatalogDocument::from_json_str(raw).unwrap();
        let catalog = doc.clone().into_catalog().unwrap();

        let costs = &catalog.first_stage().sections()[0].details().unwrap().costs;
        let items: Vec<&str> = costs.iter().map(|(item, _)| item.as_str()).collect();
        assert_eq!(items, ["Search", "Filing", "Attorney"]);

        let json = CatalogDocument::from_catalog(&catalog).to_json_pretty().unwrap();
        let search = json.find("\"Search\"").unwrap();
        let attorney = json.find("\"Attorney\"").unwrap();
        assert!(search < attorney);
    }
}
