///
/// Outcome of a form submission.
///
/// Rejected submission carries the form that should be shown to the user again,
/// with the original input and validation errors.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T, F> {
    Accepted(T),
    Rejected(F),
}
