use strum::AsRefStr;

///
/// Names of the form fields that can be reported back with validation errors
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum FormField {
    #[strum(serialize = "movie_date")]
    MovieDate,
    #[strum(serialize = "movie_id")]
    MovieId,
    #[strum(serialize = "ticket_price")]
    TicketPrice,
    #[strum(serialize = "version")]
    Version,
}
