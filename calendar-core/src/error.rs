/// Errors raised at the boundary of the calendar core.
///
/// Everything past construction is infallible: cell and week indices are
/// guaranteed by the presentation layer and violations panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
}
