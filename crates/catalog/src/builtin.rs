//! The catalog shipped with the application.
//!
//! Five stages covering the life of a band's intellectual property, from
//! formation to merchandise. Template payloads are markdown text.

use guide_core::model::{
    Catalog, ParseIdError, Section, SectionDetails, Stage, StageId, Step, StepId, Task, TaskId,
    TemplateExample,
};

use crate::error::CatalogLoadError;

const BAND_AGREEMENT: &str = "\
# Band Partnership Agreement

**Parties:** the undersigned members of the band (\"Members\").

1. **Name.** The band name and any logo belong to the partnership, not to any individual Member.
2. **Departure.** A departing Member may not use the band name. Their share of income earned \
before departure remains payable.
3. **Songwriting.** Publishing splits are recorded per song in Schedule A and signed by all \
co-writers.
4. **Decisions.** Business decisions require a majority vote; sale of the name requires a \
unanimous vote.
";

const PRODUCER_AGREEMENT: &str = "\
# Producer Agreement

- **Services:** production of the recordings listed in Schedule A.
- **Fee:** a flat fee of ______, payable on delivery of final mixes.
- **Points:** ___% of net receipts, payable after recoupment of recording costs.
- **Ownership:** all master recordings are owned by the Artist.
- **Credit:** \"Produced by ______\" on all releases.
";

const DISTRIBUTION_CHECKLIST: &str = "\
# Distribution Agreement Checklist

- Term and territory are stated and limited.
- Agreement is **non-exclusive** or the exclusivity period is short.
- You keep ownership of your masters.
- Fees or revenue share are stated as a percentage of gross receipts.
- You may terminate with written notice and remove releases.
";

const PERFORMANCE_RIDER: &str = "\
# Performance Agreement Essentials

| Term | What to confirm |
| --- | --- |
| Fee | Guarantee, door split, or both |
| Deposit | Amount and due date |
| Cancellation | Who pays if the show is cancelled |
| Recording | No recording or streaming without written consent |
";

fn stage_id(raw: &str) -> Result<StageId, ParseIdError> {
    StageId::new(raw)
}

fn task_id(raw: &str) -> Result<TaskId, ParseIdError> {
    TaskId::new(raw)
}

fn step_id(raw: &str) -> Result<StepId, ParseIdError> {
    StepId::new(raw)
}

fn costs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(item, amount)| ((*item).to_owned(), (*amount).to_owned()))
        .collect()
}

fn lines(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|line| (*line).to_owned()).collect()
}

fn formation() -> Result<Stage, ParseIdError> {
    let tasks = vec![
        Task::new(
            task_id("protect-band-name")?,
            "Protect your band name",
            "Make sure nobody else already uses the name before you invest in it.",
            vec![
                Step::new(
                    step_id("name-search")?,
                    "Search existing trademarks",
                    "Search the national trademark register, streaming services and social \
                     platforms for bands using the same or a confusingly similar name.",
                )
                .with_warning("A prior user of the name can force you to rebrand later."),
                Step::new(
                    step_id("basic-agreement")?,
                    "Sign a band agreement",
                    "Record who owns the name, how income is split and what happens when a \
                     member leaves.",
                )
                .with_template(TemplateExample::new("Band Partnership Agreement", BAND_AGREEMENT)),
            ],
        )
        .with_priority("high"),
    ];

    let sections = vec![
        Section::new(
            "Choosing a business structure",
            "Many bands start as an informal partnership. Forming a company limits personal \
             liability once the band earns money or signs contracts.",
        )
        .with_details(SectionDetails {
            steps: lines(&[
                "Decide whether members share liability personally",
                "Open a separate bank account for band income",
                "Keep minutes of band decisions",
            ]),
            ..SectionDetails::default()
        }),
        Section::new(
            "Typical formation costs",
            "Indicative fees; check the current schedule before filing.",
        )
        .with_details(SectionDetails {
            costs: costs(&[
                ("Company registration", "$50 - $150"),
                ("Trademark search (professional)", "$300 - $500"),
                ("Agreement review by a lawyer", "$500 - $1,500"),
            ]),
            warnings: lines(&["Fees vary by jurisdiction."]),
            ..SectionDetails::default()
        }),
    ];

    Ok(Stage::new(
        stage_id("formation")?,
        "Band Formation",
        "Lay the legal groundwork before the band releases anything.",
        tasks,
    )
    .with_sections(sections))
}

fn recording() -> Result<Stage, ParseIdError> {
    let tasks = vec![
        Task::new(
            task_id("producer-agreement")?,
            "Agree terms with your producer",
            "Clarify who owns the masters and what the producer is paid.",
            vec![
                Step::new(
                    step_id("producer-contract")?,
                    "Sign a producer contract",
                    "Put fees, royalty points, credit and master ownership in writing before \
                     the first session.",
                )
                .with_warning("Without a written agreement the producer may claim co-ownership.")
                .with_template(TemplateExample::new("Producer Agreement", PRODUCER_AGREEMENT)),
            ],
        )
        .with_priority("high"),
    ];

    let sections = vec![
        Section::new(
            "Copyright in recordings",
            "A song and its recording are separate works with separate owners.",
        )
        .with_details(SectionDetails {
            steps: lines(&[
                "Register each composition with a collecting society",
                "Keep dated session files and lyric drafts",
            ]),
            ..SectionDetails::default()
        }),
    ];

    Ok(Stage::new(
        stage_id("recording")?,
        "Recording",
        "Secure the rights in your songs and recordings.",
        tasks,
    )
    .with_sections(sections))
}

fn distribution() -> Result<Stage, ParseIdError> {
    let tasks = vec![Task::new(
        task_id("choose-distributor")?,
        "Choose a distributor",
        "Compare fees, exclusivity and ownership terms.",
        vec![
            Step::new(
                step_id("distributor")?,
                "Review the distribution agreement",
                "Check the term, territory, revenue share and how to leave.",
            )
            .with_template(TemplateExample::new(
                "Distribution Agreement Checklist",
                DISTRIBUTION_CHECKLIST,
            )),
        ],
    )];

    Ok(Stage::new(
        stage_id("distribution")?,
        "Distribution",
        "Get your music to stores and streaming services on fair terms.",
        tasks,
    ))
}

fn performance() -> Result<Stage, ParseIdError> {
    let tasks = vec![Task::new(
        task_id("live-contracts")?,
        "Book shows on paper",
        "Every paid show should have a written agreement.",
        vec![
            Step::new(
                step_id("contract-review")?,
                "Review performance contracts",
                "Confirm fee, deposit, cancellation terms and recording rights.",
            )
            .with_warning("Verbal bookings are hard to enforce.")
            .with_template(TemplateExample::new(
                "Performance Agreement Essentials",
                PERFORMANCE_RIDER,
            )),
        ],
    )
    .with_priority("medium")];

    Ok(Stage::new(
        stage_id("performance")?,
        "Live Performance",
        "Protect the band when playing live.",
        tasks,
    ))
}

fn merchandise() -> Result<Stage, ParseIdError> {
    let tasks = vec![Task::new(
        task_id("register-trademark")?,
        "Register your trademark",
        "Registration lets you stop counterfeit merchandise.",
        vec![Step::new(
            step_id("file-trademark")?,
            "File a trademark application",
            "File for the band name and logo in the classes covering recordings, \
             performances and clothing.",
        )],
    )];

    let sections = vec![
        Section::new(
            "Trademark classes",
            "Each class of goods or services is filed and paid for separately.",
        )
        .with_details(SectionDetails {
            costs: costs(&[
                ("Class 9 (recordings)", "$250 - $350"),
                ("Class 25 (clothing)", "$250 - $350"),
                ("Class 41 (entertainment)", "$250 - $350"),
            ]),
            ..SectionDetails::default()
        }),
    ];

    Ok(Stage::new(
        stage_id("merchandise")?,
        "Merchandise",
        "Brand your merchandise safely.",
        tasks,
    )
    .with_sections(sections))
}

/// Build the built-in catalog.
///
/// # Errors
///
/// Returns `CatalogLoadError` only if the built-in content is malformed.
pub fn catalog() -> Result<Catalog, CatalogLoadError> {
    let stages = vec![
        formation()?,
        recording()?,
        distribution()?,
        performance()?,
        merchandise()?,
    ];
    Ok(Catalog::new(stages)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_canonical_shape() {
        let catalog = catalog().unwrap();
        let shape: Vec<(&str, usize)> = catalog
            .stages()
            .iter()
            .map(|stage| (stage.id().as_str(), stage.step_count()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("formation", 2),
                ("recording", 1),
                ("distribution", 1),
                ("performance", 1),
                ("merchandise", 1),
            ]
        );
        assert_eq!(catalog.step_count(), 6);
    }

    #[test]
    fn builtin_steps_are_where_expected() {
        let catalog = catalog().unwrap();
        for (step, stage) in [
            ("name-search", "formation"),
            ("basic-agreement", "formation"),
            ("producer-contract", "recording"),
            ("distributor", "distribution"),
            ("contract-review", "performance"),
            ("file-trademark", "merchandise"),
        ] {
            let owner = catalog.stage_of_step(&StepId::new(step).unwrap()).unwrap();
            assert_eq!(owner.id().as_str(), stage, "{step}");
        }
    }
}
