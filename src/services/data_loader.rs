// ============================================================================
// DATA LOADER - Parallel fetch of every collection
// ============================================================================

use serde_json::Value;
use crate::error::ClientResult;
use crate::models::Collection;
use crate::services::backend::Backend;

/// Outcome of one collection request
pub type CollectionResult = (Collection, ClientResult<Vec<Value>>);

/// Fire the five GETs together and wait for all of them to settle.
/// A failing request never cancels the others.
pub async fn fetch_all<B: Backend>(backend: &B) -> Vec<CollectionResult> {
    let (students, sections, rehearsals, section_students, attendance) = futures::join!(
        backend.fetch_collection(Collection::Students),
        backend.fetch_collection(Collection::Sections),
        backend.fetch_collection(Collection::Rehearsals),
        backend.fetch_collection(Collection::SectionStudents),
        backend.fetch_collection(Collection::Attendance),
    );

    vec![
        (Collection::Students, students),
        (Collection::Sections, sections),
        (Collection::Rehearsals, rehearsals),
        (Collection::SectionStudents, section_students),
        (Collection::Attendance, attendance),
    ]
}
