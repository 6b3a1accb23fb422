mod ticket;
mod ticket_details;

pub use ticket::*;
pub use ticket_details::*;
