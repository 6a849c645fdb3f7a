use crate::domain::models::overview::{ProgramOverviewRow, SessionOverviewRecord};
use crate::domain::services::capacity;

/// Projects the raw join records into resolved overview rows. The records
/// arrive already ordered by start_time (nulls last) from the store; this
/// step only applies the capacity resolution per row.
pub fn build_overview(records: Vec<SessionOverviewRecord>) -> Vec<ProgramOverviewRow> {
    records
        .into_iter()
        .map(|record| {
            let attendee_limit = capacity::effective_attendee_limit(
                record.item_attendee_limit,
                record.session_attendee_limit,
            );

            ProgramOverviewRow {
                program_item_id: record.program_item_id,
                name: record.name,
                item_type: record.item_type,
                attendee_limit,
                attendee_limit_buffer: record.attendee_limit_buffer,
                note: record.note,
                status: record.status,
                required_min: record.required_min,
                before_buffer_min: record.before_buffer_min,
                after_buffer_min: record.after_buffer_min,
                start_time: record.start_time,
                end_time: record.end_time,
                attendee_count: record.attendee_count,
            }
        })
        .collect()
}
