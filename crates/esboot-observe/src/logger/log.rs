use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, fmt::MakeWriter, fmt::time::OffsetTime,
    layer::SubscriberExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Assemble the subscriber for `cfg`, writing through `writer`.
///
/// The installed logger passes `std::io::stderr`; tests pass an in-memory sink.
pub(crate) fn build<W>(
    cfg: &LoggerConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&cfg.level)
        .map_err(|_| LoggerError::InvalidLogLevel(cfg.level.clone()))?;
    let output = output_layer(cfg, writer)?;

    Ok(tracing_subscriber::registry().with(output).with(filter))
}

fn output_layer<W>(cfg: &LoggerConfig, writer: W) -> Result<BoxedLayer, LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match cfg.format {
        LoggerFormat::Text => Ok(fmt::layer()
            .with_writer(writer)
            .with_ansi(cfg.use_color)
            .with_timer(timer())
            .boxed()),
        LoggerFormat::Json => Ok(fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_timer(timer())
            .boxed()),
        LoggerFormat::Journald => journald_layer(),
    }
}

// Local offset lookup is only sound while single-threaded; fall back to UTC otherwise.
fn timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald_layer() -> Result<BoxedLayer, LoggerError> {
    let layer = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?;
    Ok(layer.boxed())
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald_layer() -> Result<BoxedLayer, LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}
