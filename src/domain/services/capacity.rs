use crate::domain::models::program_item::ProgramItem;
use crate::domain::models::session::ProgramSession;

/// The values actually in force for one session after applying
/// override-over-default resolution. Pure data, no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveCapacity {
    pub attendee_limit: Option<i64>,
    pub location_id: Option<String>,
    pub required_min: i32,
    pub before_buffer_min: i32,
    pub after_buffer_min: i32,
}

/// Session override wins when set; null falls through to the item default.
/// Both sides may be null, meaning unlimited. A null override cannot be told
/// apart from "no override" in this model.
pub fn effective_attendee_limit(
    item_limit: Option<i64>,
    session_override: Option<i64>,
) -> Option<i64> {
    session_override.or(item_limit)
}

pub fn effective_location<'a>(
    item: &'a ProgramItem,
    session: &'a ProgramSession,
) -> Option<&'a str> {
    session
        .location_id
        .as_deref()
        .or(item.location_id.as_deref())
}

pub fn resolve(item: &ProgramItem, session: &ProgramSession) -> EffectiveCapacity {
    EffectiveCapacity {
        attendee_limit: effective_attendee_limit(item.attendee_limit, session.attendee_limit),
        location_id: effective_location(item, session).map(str::to_owned),
        required_min: item.required_min,
        before_buffer_min: item.before_buffer_min,
        after_buffer_min: item.after_buffer_min,
    }
}

/// Hard registration ceiling: effective limit plus the item's overbooking
/// buffer. None means the session accepts registrations without bound.
pub fn registration_cap(item: &ProgramItem, session: &ProgramSession) -> Option<i64> {
    effective_attendee_limit(item.attendee_limit, session.attendee_limit)
        .map(|limit| limit + item.attendee_limit_buffer.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::program_item::{NewProgramItemParams, ProgramItemType};
    use crate::domain::models::session::{NewSessionParams, SessionStatus};

    fn item(attendee_limit: Option<i64>, buffer: Option<i64>) -> ProgramItem {
        ProgramItem::new(NewProgramItemParams {
            event_id: "event-1".into(),
            location_id: Some("loc-item".into()),
            name: "Knitting steel wires".into(),
            description: None,
            item_type: ProgramItemType::Workshop,
            attendee_limit,
            attendee_limit_buffer: buffer,
            required_min: 120,
            before_buffer_min: 10,
            after_buffer_min: 10,
        })
    }

    fn session(attendee_limit: Option<i64>, location_id: Option<String>) -> ProgramSession {
        ProgramSession::new(NewSessionParams {
            program_item_id: "item-1".into(),
            location_id,
            start_time: None,
            end_time: None,
            note: None,
            status: SessionStatus::Draft,
            attendee_limit,
        })
    }

    #[test]
    fn session_override_wins_over_item_limit() {
        assert_eq!(effective_attendee_limit(Some(5), Some(3)), Some(3));
        assert_eq!(effective_attendee_limit(None, Some(3)), Some(3));
    }

    #[test]
    fn null_override_falls_through_to_item() {
        assert_eq!(effective_attendee_limit(Some(5), None), Some(5));
        assert_eq!(effective_attendee_limit(None, None), None);
    }

    #[test]
    fn resolve_carries_item_duration_and_buffers() {
        let item = item(Some(5), None);
        let session = session(Some(3), None);

        let effective = resolve(&item, &session);
        assert_eq!(effective.attendee_limit, Some(3));
        assert_eq!(effective.required_min, 120);
        assert_eq!(effective.before_buffer_min, 10);
        assert_eq!(effective.after_buffer_min, 10);
    }

    #[test]
    fn location_override_falls_back_to_item_default() {
        let item = item(None, None);
        assert_eq!(
            effective_location(&item, &session(None, Some("loc-session".into()))),
            Some("loc-session")
        );
        assert_eq!(
            effective_location(&item, &session(None, None)),
            Some("loc-item")
        );
    }

    #[test]
    fn registration_cap_adds_buffer_on_top_of_effective_limit() {
        assert_eq!(registration_cap(&item(Some(5), Some(2)), &session(None, None)), Some(7));
        assert_eq!(registration_cap(&item(Some(5), Some(2)), &session(Some(3), None)), Some(5));
        assert_eq!(registration_cap(&item(Some(5), None), &session(None, None)), Some(5));
        assert_eq!(registration_cap(&item(None, Some(2)), &session(None, None)), None);
    }
}
