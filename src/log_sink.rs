/// Destination for the lines the executor and renderer produce.
///
/// Production code writes through [`TracingSink`]; tests swap in a
/// recorder so they can assert on exactly what was logged.
pub(crate) trait LogSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

pub(crate) struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
