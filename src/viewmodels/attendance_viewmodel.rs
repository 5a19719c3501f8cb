// ============================================================================
// ATTENDANCE VIEWMODEL - Roster building and batch submission
// ============================================================================

use std::rc::Rc;
use crate::error::ClientResult;
use crate::models::{AttendanceBatch, AttendanceEntry, AttendanceStatus};
use crate::services::{Backend, Dialogs};
use crate::state::{AppState, DataStore, Roster, RosterEntry, SectionFilter, Tone};
use crate::utils::{t, tf};
use crate::viewmodels::DataViewModel;

/// Students listed for a rehearsal: everybody for "all", else the members of
/// the section. Store order, each student at most once.
pub fn build_roster(
    store: &DataStore,
    rehearsal_id: &str,
    filter: &SectionFilter,
    lang: &str,
) -> Roster {
    let students = store.students();
    let (selected, section_name) = match filter {
        SectionFilter::All => (students, None),
        SectionFilter::Section(section_id) => {
            let members = store.members_of(section_id);
            let name = store
                .find_section(section_id)
                .map(|s| s.section_name)
                .unwrap_or_else(|| t("selected_section", lang));
            (
                students
                    .into_iter()
                    .filter(|s| members.contains(&s.student_id))
                    .collect(),
                Some(name),
            )
        }
    };

    let rehearsal_label = store
        .find_rehearsal(rehearsal_id)
        .map(|r| r.date)
        .unwrap_or_else(|| rehearsal_id.to_string());

    Roster {
        rehearsal_id: rehearsal_id.to_string(),
        rehearsal_label,
        section_name,
        entries: selected
            .into_iter()
            .map(|student| RosterEntry {
                parts: store.part_label(&student.student_id),
                student_id: student.student_id,
                name: student.name,
                status: AttendanceStatus::default(),
            })
            .collect(),
    }
}

/// "[date] 전체 파트 출석 체크" / "[date] <section> 출석 체크"
pub fn roster_title(roster: &Roster, lang: &str) -> String {
    match &roster.section_name {
        None => tf("roster_title_all", lang, &[&roster.rehearsal_label]),
        Some(name) => tf("roster_title_section", lang, &[&roster.rehearsal_label, name]),
    }
}

pub struct AttendanceViewModel<B: Backend, D: Dialogs> {
    state: AppState,
    backend: Rc<B>,
    dialogs: Rc<D>,
    data: DataViewModel<B>,
}

impl<B: Backend, D: Dialogs> Clone for AttendanceViewModel<B, D> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            backend: self.backend.clone(),
            dialogs: self.dialogs.clone(),
            data: self.data.clone(),
        }
    }
}

impl<B: Backend, D: Dialogs> AttendanceViewModel<B, D> {
    pub fn new(state: AppState, backend: Rc<B>, dialogs: Rc<D>) -> Self {
        let data = DataViewModel::new(state.clone(), backend.clone());
        Self { state, backend, dialogs, data }
    }

    pub fn select_rehearsal(&self, rehearsal_id: String) {
        self.state.attendance.set_rehearsal(Some(rehearsal_id).filter(|id| !id.is_empty()));
    }

    pub fn select_section(&self, value: &str) {
        self.state.attendance.set_section_filter(SectionFilter::from_value(value));
    }

    /// Explicit choice if it still exists, else the first rehearsal (what a
    /// freshly populated dropdown shows)
    pub fn effective_rehearsal(&self) -> Option<String> {
        let store = &self.state.store;
        self.state
            .attendance
            .get_rehearsal()
            .filter(|id| store.find_rehearsal(id).is_some())
            .or_else(|| store.rehearsals().first().map(|r| r.rehearsal_id.clone()))
    }

    pub fn load_roster(&self) {
        let lang = self.state.lang();
        let Some(rehearsal_id) = self.effective_rehearsal() else {
            self.state.attendance.set_save_status(t("no_rehearsal", &lang), Tone::Warning);
            self.state.notify_changed();
            return;
        };

        let filter = self.state.attendance.get_section_filter();
        let roster = build_roster(&self.state.store, &rehearsal_id, &filter, &lang);
        log::info!(
            "📋 [ATTENDANCE] Roster for rehearsal {} ({}): {} students",
            rehearsal_id,
            filter.value(),
            roster.entries.len()
        );
        self.state.attendance.set_roster(Some(roster));
        self.state.notify_changed();
    }

    /// Radio change; kept in state only
    pub fn set_status(&self, student_id: &str, status: AttendanceStatus) {
        self.state.attendance.set_status(student_id, status);
    }

    /// Submit the roster as one batch. Ok(false) when nothing was sent.
    pub async fn submit(&self) -> ClientResult<bool> {
        let lang = self.state.lang();
        let marker = self.state.auth.marker_name();
        let roster = self.state.attendance.get_roster();
        let rehearsal_id = roster
            .as_ref()
            .map(|r| r.rehearsal_id.clone())
            .or_else(|| self.effective_rehearsal())
            .unwrap_or_default();

        if self.state.store.has_submission(&rehearsal_id, &marker)
            && !self.dialogs.confirm(&t("duplicate_confirm", &lang))
        {
            log::info!("🚫 [ATTENDANCE] Duplicate submission declined");
            self.state.attendance.set_save_status(t("save_cancelled", &lang), Tone::Warning);
            self.state.notify_changed();
            return Ok(false);
        }

        let records: Vec<AttendanceEntry> = roster
            .map(|r| r.entries)
            .unwrap_or_default()
            .into_iter()
            .map(|entry| AttendanceEntry {
                rehearsal_id: rehearsal_id.clone(),
                student_id: entry.student_id,
                status: entry.status,
                memo: String::new(),
            })
            .collect();

        if records.is_empty() {
            self.state.attendance.set_save_status(t("nothing_to_save", &lang), Tone::Warning);
            self.state.notify_changed();
            return Ok(false);
        }

        self.state.attendance.set_save_status(t("saving", &lang), Tone::Info);
        self.state.notify_changed();

        let batch = AttendanceBatch { marked_by: marker, records };
        log::info!("💾 [ATTENDANCE] Submitting {} records for {}", batch.records.len(), rehearsal_id);

        match self.backend.submit_attendance(&batch).await {
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| t("save_success", &lang));
                self.state.attendance.set_save_status(message, Tone::Success);
                self.data.reload().await;
                self.state.attendance.clear_roster();
                self.state.notify_changed();
                Ok(true)
            }
            Err(e) => {
                log::error!("❌ [ATTENDANCE] {}", e);
                self.state
                    .attendance
                    .set_save_status(tf("save_error", &lang, &[&e.to_string()]), Tone::Error);
                self.state.notify_changed();
                Err(e)
            }
        }
    }
}
