use guide_core::Progress;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressSummaryVm {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub label: String,
}

#[must_use]
pub fn map_progress_summary(progress: Progress) -> ProgressSummaryVm {
    let noun = if progress.total == 1 { "step" } else { "steps" };
    ProgressSummaryVm {
        completed: progress.completed,
        total: progress.total,
        percentage: progress.percentage,
        label: format!("{} of {} {noun} complete", progress.completed, progress.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_counts_steps() {
        let vm = map_progress_summary(Progress::from_counts(2, 6));
        assert_eq!(vm.label, "2 of 6 steps complete");
        assert_eq!(vm.percentage, 33);

        let single = map_progress_summary(Progress::from_counts(0, 1));
        assert_eq!(single.label, "0 of 1 step complete");
    }
}
