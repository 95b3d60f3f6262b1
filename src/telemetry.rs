use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `level` is an `EnvFilter` directive such as `info` or
/// `studio_return=debug,actix_web=info`. `format` picks the formatter:
/// `pretty`, `compact`, or anything else for the default.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}
