use serde::Deserialize;

///
/// Submitted edit form.
///
/// Only these fields are bound. Anything else sent with the form
/// (the movie reference in particular) is ignored.
///
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditTicket {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub movie_date: String,
    #[serde(default)]
    pub ticket_price: String,
    #[serde(default)]
    pub version: String,
}
