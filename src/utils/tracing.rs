/// Log an error together with its whole chain of sources at error level.
///
/// An optional message, with the same syntax as [`tracing::error!`], is
/// attached to the event.
#[macro_export]
macro_rules! tracing_report {
    ($error:expr) => {
        tracing::error!(err = %snafu::Report::from_error(&$error));
    };
    ($error:expr, $($arg:tt)+) => {
        tracing::error!(err = %snafu::Report::from_error(&$error), $($arg)+);
    };
}
