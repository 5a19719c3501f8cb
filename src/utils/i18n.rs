// ============================================================================
// I18N - Korean / English UI copy
// ============================================================================

use std::collections::HashMap;

pub const LANG_KO: &str = "KO";
pub const LANG_EN: &str = "EN";

/// Language shown by the header toggle for the given current language
pub fn other_language(lang: &str) -> &'static str {
    if lang.eq_ignore_ascii_case(LANG_EN) {
        LANG_KO
    } else {
        LANG_EN
    }
}

fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Shell
            translations.insert("app_title", "Orchestra Attendance");
            translations.insert("user_suffix", "{}");
            translations.insert("logout", "Log out");
            translations.insert("language_toggle", "한국어");
            translations.insert("nav_attendance", "Attendance");
            translations.insert("nav_data", "Data");
            translations.insert("nav_reports", "Reports");
            translations.insert("tab_students", "Members");
            translations.insert("tab_sections", "Sections");
            translations.insert("tab_rehearsals", "Rehearsals");

            // Login
            translations.insert("username", "Username");
            translations.insert("password", "Password");
            translations.insert("login", "Log in");
            translations.insert("login_required", "Please enter both username and password.");
            translations.insert("login_failed", "Login failed: {}");
            translations.insert("welcome", "Welcome, {}!");

            // Loader
            translations.insert("load_failed", "Data load failed ({}): {}");

            // Tables
            translations.insert("actions", "Actions");
            translations.insert("edit", "Edit");
            translations.insert("save", "Save");
            translations.insert("delete", "Delete");
            translations.insert("cancel", "Cancel");
            translations.insert("add", "Add");
            translations.insert("auto_generated", "Auto-generated");
            translations.insert("choose_section", "-- Choose section --");
            translations.insert("update_success", "Saved successfully!");
            translations.insert("update_failed", "Update failed: {}");
            translations.insert("delete_confirm", "Delete this item? (ID: {})\nThis cannot be undone.");
            translations.insert("delete_cancelled", "Delete cancelled.");
            translations.insert("delete_success", "Deleted successfully!");
            translations.insert("delete_failed", "Delete failed: {}");
            translations.insert("add_pending", "A new item is already being added. Save or cancel it first.");
            translations.insert("add_success", "Added successfully.");
            translations.insert("add_failed", "Add failed: {}");

            // Attendance
            translations.insert("rehearsal", "Rehearsal");
            translations.insert("section", "Section");
            translations.insert("all", "All");
            translations.insert("load_roster", "Load members");
            translations.insert("save_attendance", "Save attendance");
            translations.insert("roster_title_all", "[{}] Attendance - all sections");
            translations.insert("roster_title_section", "[{}] Attendance - {}");
            translations.insert("selected_section", "selected section");
            translations.insert("no_members", "No members to load.");
            translations.insert("no_rehearsal", "Choose a rehearsal first.");
            translations.insert("col_name", "Name");
            translations.insert("col_part", "Section");
            translations.insert("col_status", "Status");
            translations.insert("status_present", "Present");
            translations.insert("status_late", "Late");
            translations.insert("status_absent", "Absent");
            translations.insert("status_excused_absent", "Excused");
            translations.insert("duplicate_confirm", "You already saved attendance for this rehearsal. Save again?\n(Earlier records are kept; this is stored as a new version.)");
            translations.insert("save_cancelled", "Save cancelled.");
            translations.insert("nothing_to_save", "Nothing to save.");
            translations.insert("saving", "Saving...");
            translations.insert("save_success", "Saved successfully!");
            translations.insert("save_error", "Error while saving: {}");

            // Reports
            translations.insert("report_kind", "Report by");
            translations.insert("report_kind_student", "Member");
            translations.insert("report_kind_section", "Section");
            translations.insert("report_target", "Target");
            translations.insert("generate_report", "Generate report");
            translations.insert("report_student_title", "{} - personal report");
            translations.insert("report_section_title", "{} - section report");
            translations.insert("report_all_title", "All sections report");
            translations.insert("report_student_not_found", "Member not found.");
            translations.insert("report_section_not_found", "Section not found.");
            translations.insert("report_no_records", "No attendance records for this target.");
            translations.insert("report_total", "Rehearsals recorded");
            translations.insert("report_rate", "Attendance rate (absences excluded)");
            translations.insert("report_unknown", "Other");
            translations.insert("times", "{} times");

            // CSV
            translations.insert("export_button", "Export CSV");
            translations.insert("import_button", "Import CSV");
            translations.insert("export_start", "Starting CSV export...");
            translations.insert("export_server_failed", "The server could not create the export file.");
            translations.insert("export_success", "Data exported successfully.");
            translations.insert("export_failed", "Export failed: {}");
            translations.insert("import_confirm", "Import data? Everything in the database will be replaced by the uploaded file. This cannot be undone.");
            translations.insert("import_cancelled", "Import cancelled.");
            translations.insert("import_start", "Starting data import...");
            translations.insert("import_success", "Data imported. Reloading the app.");
            translations.insert("import_failed", "Import failed: {}");
        }
        _ => {
            // Shell
            translations.insert("app_title", "오케스트라 출석 관리");
            translations.insert("user_suffix", "{} 님");
            translations.insert("logout", "로그아웃");
            translations.insert("language_toggle", "English");
            translations.insert("nav_attendance", "출석 체크");
            translations.insert("nav_data", "데이터 관리");
            translations.insert("nav_reports", "통계");
            translations.insert("tab_students", "단원");
            translations.insert("tab_sections", "파트");
            translations.insert("tab_rehearsals", "연습 일정");

            // Login
            translations.insert("username", "아이디");
            translations.insert("password", "비밀번호");
            translations.insert("login", "로그인");
            translations.insert("login_required", "아이디와 비밀번호를 모두 입력해주세요.");
            translations.insert("login_failed", "로그인 실패: {}");
            translations.insert("welcome", "{} 님, 환영합니다!");

            // Loader
            translations.insert("load_failed", "데이터 로드 실패 ({}): {}");

            // Tables
            translations.insert("actions", "작업");
            translations.insert("edit", "수정");
            translations.insert("save", "저장");
            translations.insert("delete", "삭제");
            translations.insert("cancel", "취소");
            translations.insert("add", "추가");
            translations.insert("auto_generated", "자동 생성");
            translations.insert("choose_section", "-- 파트 선택 --");
            translations.insert("update_success", "성공적으로 수정되었습니다!");
            translations.insert("update_failed", "수정 실패: {}");
            translations.insert("delete_confirm", "정말로 이 항목을 삭제하시겠습니까? (ID: {})\n이 작업은 되돌릴 수 없습니다.");
            translations.insert("delete_cancelled", "삭제가 취소되었습니다.");
            translations.insert("delete_success", "성공적으로 삭제되었습니다!");
            translations.insert("delete_failed", "삭제 실패: {}");
            translations.insert("add_pending", "이미 추가 중인 항목이 있습니다. 먼저 저장하거나 취소해주세요.");
            translations.insert("add_success", "성공적으로 추가되었습니다.");
            translations.insert("add_failed", "추가 실패: {}");

            // Attendance
            translations.insert("rehearsal", "연습일");
            translations.insert("section", "파트");
            translations.insert("all", "전체");
            translations.insert("load_roster", "단원 불러오기");
            translations.insert("save_attendance", "출석 저장");
            translations.insert("roster_title_all", "[{}] 전체 파트 출석 체크");
            translations.insert("roster_title_section", "[{}] {} 출석 체크");
            translations.insert("selected_section", "선택 파트");
            translations.insert("no_members", "불러올 단원이 없습니다.");
            translations.insert("no_rehearsal", "연습일을 선택해주세요.");
            translations.insert("col_name", "이름");
            translations.insert("col_part", "파트");
            translations.insert("col_status", "상태");
            translations.insert("status_present", "출석");
            translations.insert("status_late", "지각");
            translations.insert("status_absent", "결석");
            translations.insert("status_excused_absent", "공결");
            translations.insert("duplicate_confirm", "이미 이 연습일에 대한 출석 기록을 저장했습니다. 추가로 저장하시겠습니까?\n(이전 기록에 덮어쓰지 않고, 새로운 버전으로 추가 저장됩니다.)");
            translations.insert("save_cancelled", "저장이 취소되었습니다.");
            translations.insert("nothing_to_save", "저장할 데이터가 없습니다.");
            translations.insert("saving", "저장 중...");
            translations.insert("save_success", "성공적으로 저장되었습니다!");
            translations.insert("save_error", "저장 중 오류 발생: {}");

            // Reports
            translations.insert("report_kind", "리포트 종류");
            translations.insert("report_kind_student", "학생별");
            translations.insert("report_kind_section", "파트별");
            translations.insert("report_target", "대상");
            translations.insert("generate_report", "리포트 생성");
            translations.insert("report_student_title", "{} 학생 개인 리포트");
            translations.insert("report_section_title", "{} 파트 리포트");
            translations.insert("report_all_title", "전체 파트 리포트");
            translations.insert("report_student_not_found", "학생을 찾을 수 없습니다.");
            translations.insert("report_section_not_found", "파트를 찾을 수 없습니다.");
            translations.insert("report_no_records", "해당 대상의 출석 기록이 없습니다.");
            translations.insert("report_total", "총 연습 횟수 (기록된)");
            translations.insert("report_rate", "출석률 (결석 제외)");
            translations.insert("report_unknown", "기타");
            translations.insert("times", "{}회");

            // CSV
            translations.insert("export_button", "CSV 내보내기");
            translations.insert("import_button", "CSV 가져오기");
            translations.insert("export_start", "CSV 데이터 내보내기를 시작합니다...");
            translations.insert("export_server_failed", "서버에서 내보내기 파일을 생성하지 못했습니다.");
            translations.insert("export_success", "데이터가 성공적으로 내보내졌습니다.");
            translations.insert("export_failed", "내보내기 실패: {}");
            translations.insert("import_confirm", "정말로 데이터를 가져오시겠습니까? 현재 데이터베이스의 모든 내용이 업로드한 파일의 데이터로 대체됩니다. 이 작업은 되돌릴 수 없습니다.");
            translations.insert("import_cancelled", "가져오기가 취소되었습니다.");
            translations.insert("import_start", "데이터 가져오기를 시작합니다...");
            translations.insert("import_success", "데이터를 성공적으로 가져왔습니다. 앱을 다시 로드합니다.");
            translations.insert("import_failed", "가져오기 실패: {}");
        }
    }

    translations
}

/// Translate `key`; unknown keys come back unchanged
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// Translate and fill each `{}` with the next argument, in order
pub fn tf(key: &str, lang: &str, args: &[&str]) -> String {
    let template = t(key, lang);
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template.as_str();

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_is_the_fallback_language() {
        assert_eq!(t("logout", "KO"), "로그아웃");
        assert_eq!(t("logout", "fr"), "로그아웃");
        assert_eq!(t("logout", "en"), "Log out");
        assert_eq!(t("no_such_key", "KO"), "no_such_key");
    }

    #[test]
    fn tf_fills_placeholders_in_order() {
        assert_eq!(tf("load_failed", "KO", &["students", "HTTP 500"]), "데이터 로드 실패 (students): HTTP 500");
        assert_eq!(tf("welcome", "KO", &["김지휘"]), "김지휘 님, 환영합니다!");
        assert_eq!(tf("roster_title_section", "EN", &["2025-01-10"]), "[2025-01-10] Attendance - {}");
    }

    #[test]
    fn every_korean_key_has_an_english_entry() {
        let ko = get_translations("KO");
        let en = get_translations("EN");
        for key in ko.keys() {
            assert!(en.contains_key(key), "missing EN copy for {}", key);
        }
        assert_eq!(ko.len(), en.len());
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(other_language("KO"), "EN");
        assert_eq!(other_language("en"), "KO");
    }
}
