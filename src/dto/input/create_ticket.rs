use serde::Deserialize;

///
/// Submitted create form.
///
/// Values are kept exactly as typed by the user so the form
/// can be rendered again when validation fails.
///
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateTicket {
    #[serde(default)]
    pub movie_date: String,
    #[serde(default)]
    pub movie_id: String,
    #[serde(default)]
    pub ticket_price: String,
}
