mod create_ticket;
mod edit_ticket;
mod form_field;
mod ticket_filter;

pub use create_ticket::*;
pub use edit_ticket::*;
pub use form_field::*;
pub use ticket_filter::*;
