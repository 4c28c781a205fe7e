//! Eventbrite webhook action names.

/// Every action a webhook subscription can listen for.
pub const ACTIONS: [&str; 15] = [
    "attendee.updated",
    "attendee.checked_in",
    "attendee.checked_out",
    "event.created",
    "event.published",
    "event.unpublished",
    "event.updated",
    "order.placed",
    "order.refunded",
    "order.updated",
    "organizer.updated",
    "ticket_class.created",
    "ticket_class.deleted",
    "ticket_class.updated",
    "venue.updated",
];

pub fn is_known_action(action: &str) -> bool {
    ACTIONS.contains(&action)
}

/// Split a comma-separated action list, dropping blanks.
pub fn parse_action_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
