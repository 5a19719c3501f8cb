// ============================================================================
// REPORT VIEWMODEL - Attendance statistics per student or section
// ============================================================================

use crate::models::{AttendanceReport, AttendanceStats, ReportError, ReportKind, ReportSubject};
use crate::state::{AppState, DataStore, ALL_SECTIONS};
use crate::utils::{t, tf};

/// Select the records for a target and tally them. Pure; the store is only read.
pub fn generate_report(
    store: &DataStore,
    kind: ReportKind,
    target: &str,
) -> Result<AttendanceReport, ReportError> {
    let records = store.attendance();

    match kind {
        ReportKind::Student => {
            let student = store.find_student(target).ok_or(ReportError::StudentNotFound)?;
            let stats = AttendanceStats::tally(records.iter().filter(|r| r.student_id == target));
            Ok(AttendanceReport {
                subject: ReportSubject::Student { name: student.name },
                stats,
            })
        }
        ReportKind::Section if target == ALL_SECTIONS => Ok(AttendanceReport {
            subject: ReportSubject::AllSections,
            stats: AttendanceStats::tally(records.iter()),
        }),
        ReportKind::Section => {
            let section = store.find_section(target).ok_or(ReportError::SectionNotFound)?;
            let members = store.members_of(target);
            let stats = AttendanceStats::tally(records.iter().filter(|r| members.contains(&r.student_id)));
            Ok(AttendanceReport {
                subject: ReportSubject::Section { name: section.section_name },
                stats,
            })
        }
    }
}

pub fn report_title(report: &AttendanceReport, lang: &str) -> String {
    match &report.subject {
        ReportSubject::Student { name } => tf("report_student_title", lang, &[name]),
        ReportSubject::Section { name } => tf("report_section_title", lang, &[name]),
        ReportSubject::AllSections => t("report_all_title", lang),
    }
}

#[derive(Clone)]
pub struct ReportViewModel {
    state: AppState,
}

impl ReportViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Switching dimension repopulates the target dropdown
    pub fn set_kind(&self, kind: ReportKind) {
        self.state.report.set_kind(kind);
        self.state.notify_changed();
    }

    pub fn set_target(&self, value: String) {
        self.state.report.set_target(Some(value).filter(|v| !v.is_empty()));
    }

    /// (value, label) pairs for the target dropdown
    pub fn target_options(&self) -> Vec<(String, String)> {
        let store = &self.state.store;
        match self.state.report.get_kind() {
            ReportKind::Student => store
                .students()
                .into_iter()
                .map(|s| (s.student_id, s.name))
                .collect(),
            ReportKind::Section => std::iter::once((ALL_SECTIONS.to_string(), t("all", &self.state.lang())))
                .chain(store.sections().into_iter().map(|s| (s.section_id, s.section_name)))
                .collect(),
        }
    }

    /// Chosen target if still offered, else the first option
    pub fn effective_target(&self) -> Option<String> {
        let options = self.target_options();
        self.state
            .report
            .get_target()
            .filter(|target| options.iter().any(|(value, _)| value == target))
            .or_else(|| options.into_iter().next().map(|(value, _)| value))
    }

    pub fn generate(&self) {
        let kind = self.state.report.get_kind();
        let target = self.effective_target().unwrap_or_default();
        let result = generate_report(&self.state.store, kind, &target);

        match &result {
            Ok(report) => log::info!(
                "📊 [REPORT] {} {}: total {}, rate {}",
                kind.value(),
                target,
                report.stats.total,
                report.stats.rate_label()
            ),
            Err(e) => log::warn!("⚠️ [REPORT] {} {}: {:?}", kind.value(), target, e),
        }

        self.state.report.set_result(Some(result));
        self.state.notify_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::models::Collection;

    fn store_with(attendance: serde_json::Value) -> DataStore {
        let store = DataStore::new();
        store
            .replace_collection(Collection::Students, vec![
                json!({"student_id": 1, "name": "Kim"}),
                json!({"student_id": 2, "name": "Lee"}),
            ])
            .unwrap();
        store
            .replace_collection(Collection::Sections, vec![
                json!({"section_id": 10, "section_name": "Violin"}),
                json!({"section_id": 20, "section_name": "Cello"}),
            ])
            .unwrap();
        store
            .replace_collection(Collection::SectionStudents, vec![
                json!({"section_id": 10, "student_id": 1}),
            ])
            .unwrap();
        store
            .replace_collection(Collection::Attendance, attendance.as_array().cloned().unwrap())
            .unwrap();
        store
    }

    fn record(student_id: u32, status: &str) -> serde_json::Value {
        json!({"attendance_id": 0, "rehearsal_id": 1, "student_id": student_id, "status": status})
    }

    #[test]
    fn no_matching_records_gives_na_and_zero_counts() {
        let store = store_with(json!([record(2, "present")]));
        let report = generate_report(&store, ReportKind::Student, "1").unwrap();

        assert_eq!(report.stats, AttendanceStats::default());
        assert_eq!(report.stats.rate_label(), "N/A");
        assert_eq!(report_title(&report, "KO"), "Kim 학생 개인 리포트");
    }

    #[test]
    fn present_present_late_absent_is_seventy_five_percent() {
        let store = store_with(json!([
            record(1, "present"),
            record(1, "present"),
            record(1, "late"),
            record(1, "absent"),
        ]));
        let report = generate_report(&store, ReportKind::Student, "1").unwrap();

        assert_eq!(report.stats.total, 4);
        assert_eq!(report.stats.present, 2);
        assert_eq!(report.stats.late, 1);
        assert_eq!(report.stats.absent, 1);
        assert_eq!(report.stats.rate_label(), "75.0");
    }

    #[test]
    fn section_report_counts_member_records_only() {
        let store = store_with(json!([
            record(1, "present"),
            record(2, "absent"),
            record(1, "weird"),
        ]));
        let report = generate_report(&store, ReportKind::Section, "10").unwrap();

        assert_eq!(report.stats.total, 2);
        assert_eq!(report.stats.unknown, 1);
        assert_eq!(report.stats.rate_label(), "50.0");
        assert_eq!(report_title(&report, "KO"), "Violin 파트 리포트");

        let everyone = generate_report(&store, ReportKind::Section, ALL_SECTIONS).unwrap();
        assert_eq!(everyone.stats.total, 3);
        assert_eq!(report_title(&everyone, "KO"), "전체 파트 리포트");
    }

    #[test]
    fn unknown_targets_are_not_found() {
        let store = store_with(json!([]));
        assert_eq!(
            generate_report(&store, ReportKind::Student, "99"),
            Err(ReportError::StudentNotFound)
        );
        assert_eq!(
            generate_report(&store, ReportKind::Section, "99"),
            Err(ReportError::SectionNotFound)
        );
    }

    #[test]
    fn changing_kind_resets_target_to_the_first_option() {
        let state = AppState::new("KO");
        for (collection, rows) in [
            (Collection::Students, vec![json!({"student_id": 1, "name": "Kim"})]),
            (Collection::Sections, vec![json!({"section_id": 10, "section_name": "Violin"})]),
        ] {
            state.store.replace_collection(collection, rows).unwrap();
        }
        let vm = ReportViewModel::new(state.clone());

        assert_eq!(vm.effective_target().as_deref(), Some("1"));
        vm.set_target("1".into());
        vm.set_kind(ReportKind::Section);
        assert_eq!(vm.effective_target().as_deref(), Some(ALL_SECTIONS));
        assert_eq!(vm.target_options()[1], ("10".to_string(), "Violin".to_string()));

        vm.generate();
        let report = state.report.get_result().unwrap().unwrap();
        assert_eq!(report.subject, ReportSubject::AllSections);
    }
}
