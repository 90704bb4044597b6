//! Error logging helpers that keep miette's formatting inside tracing events

/// Log an error at ERROR level using its `Debug` form
///
/// For `miette::Report` and `CoreError` the `Debug` form is the rendered
/// diagnostic, so the code and help text end up in the log line.
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let err = &$err;
        tracing::error!("{:?}", err);
    }};
    ($msg:expr, $err:expr) => {{
        let err = &$err;
        tracing::error!("{}: {:?}", $msg, err);
    }};
}

/// Log an error followed by every `source()` in its chain
#[macro_export]
macro_rules! log_error_chain {
    ($err:expr) => {{
        let err = &$err;
        tracing::error!("{:?}", err);
        for (depth, cause) in $crate::utils::error_logging::causes(err) {
            tracing::error!("  {}: {}", depth, cause);
        }
    }};
    ($msg:expr, $err:expr) => {{
        let err = &$err;
        tracing::error!("{}: {:?}", $msg, err);
        for (depth, cause) in $crate::utils::error_logging::causes(err) {
            tracing::error!("  {}: {}", depth, cause);
        }
    }};
}

/// The cause chain below `err`, numbered from 1.
pub fn causes<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> impl Iterator<Item = (usize, &'a (dyn std::error::Error + 'static))> {
    std::iter::successors(err.source(), |current| current.source())
        .enumerate()
        .map(|(index, cause)| (index + 1, cause))
}
