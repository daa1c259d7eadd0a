pub mod admin_handlers;
pub mod rsvp_handlers;
