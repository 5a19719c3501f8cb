// ============================================================================
// RESOURCES - Closed mapping of editable tables and fetched collections
// ============================================================================

/// Derived student column: comma-joined section names, never sent back
pub const PART_COLUMN: &str = "part";

/// Tables editable through the generic add/update/delete endpoints
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum ResourceKind {
    Students,
    Sections,
    Rehearsals,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Students,
        ResourceKind::Sections,
        ResourceKind::Rehearsals,
    ];

    /// Store key, also used as DOM id prefix (`students-table`)
    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::Students => "students",
            ResourceKind::Sections => "sections",
            ResourceKind::Rehearsals => "rehearsals",
        }
    }

    /// `filename` value expected by the backend
    pub fn filename(&self) -> &'static str {
        match self {
            ResourceKind::Students => "students.csv",
            ResourceKind::Sections => "sections.csv",
            ResourceKind::Rehearsals => "rehearsals.csv",
        }
    }

    pub fn primary_key(&self) -> &'static str {
        match self {
            ResourceKind::Students => "student_id",
            ResourceKind::Sections => "section_id",
            ResourceKind::Rehearsals => "rehearsal_id",
        }
    }

    /// Displayed columns, in order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Students => &["student_id", "name", "part", "contact", "join_date", "status"],
            ResourceKind::Sections => &["section_id", "section_name"],
            ResourceKind::Rehearsals => &["rehearsal_id", "date", "location", "description"],
        }
    }

    /// Columns that never turn into inputs when a row is edited
    pub fn is_read_only(&self, column: &str) -> bool {
        column == self.primary_key() || column == PART_COLUMN
    }

    /// Columns serialized into an update record (derived columns excluded)
    pub fn record_columns(&self) -> Vec<&'static str> {
        self.columns()
            .iter()
            .copied()
            .filter(|c| *c != PART_COLUMN)
            .collect()
    }

    /// Columns typed in by hand on a new row
    pub fn input_columns(&self) -> Vec<&'static str> {
        self.columns()
            .iter()
            .copied()
            .filter(|c| !self.is_read_only(c))
            .collect()
    }

    pub fn collection(&self) -> Collection {
        match self {
            ResourceKind::Students => Collection::Students,
            ResourceKind::Sections => Collection::Sections,
            ResourceKind::Rehearsals => Collection::Rehearsals,
        }
    }

    /// i18n key of the tab label
    pub fn label_key(&self) -> &'static str {
        match self {
            ResourceKind::Students => "tab_students",
            ResourceKind::Sections => "tab_sections",
            ResourceKind::Rehearsals => "tab_rehearsals",
        }
    }
}

/// Collections loaded on startup and after every mutation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Collection {
    Students,
    Sections,
    Rehearsals,
    SectionStudents,
    Attendance,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Students,
        Collection::Sections,
        Collection::Rehearsals,
        Collection::SectionStudents,
        Collection::Attendance,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Collection::Students => "/api/students",
            Collection::Sections => "/api/sections",
            Collection::Rehearsals => "/api/rehearsals",
            Collection::SectionStudents => "/api/section_students",
            Collection::Attendance => "/api/attendance",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Collection::Students => "students",
            Collection::Sections => "sections",
            Collection::Rehearsals => "rehearsals",
            Collection::SectionStudents => "section_students",
            Collection::Attendance => "attendance",
        }
    }

    /// Fields coerced to strings after fetch
    pub fn id_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Students => &["student_id"],
            Collection::Sections => &["section_id"],
            Collection::Rehearsals => &["rehearsal_id"],
            Collection::SectionStudents => &["section_id", "student_id"],
            Collection::Attendance => &["attendance_id", "rehearsal_id", "student_id", "save_version"],
        }
    }
}
