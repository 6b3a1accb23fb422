mod actor;
mod create_ticket_form;
mod edit_ticket_form;
mod field_error;
mod form_page;
mod movie;
mod submission;
mod ticket;

pub use actor::*;
pub use create_ticket_form::*;
pub use edit_ticket_form::*;
pub use field_error::*;
pub use form_page::*;
pub use movie::*;
pub use submission::*;
pub use ticket::*;
