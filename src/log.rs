use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;

static ENABLED: OnceCell<()> = OnceCell::new();

pub fn enable_by_env() {
    let is_enabled = std::env::var("FIND_UP_TRACE")
        .map_or(false, |var| matches!(var.as_str(), "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR"));
    if !is_enabled {
        return;
    }
    ENABLED.get_or_init(|| {
        let formatter = Formatter::default();
        // another subscriber may already be installed by the host
        let _ = tracing_subscriber::Registry::default()
            .with(formatter)
            .with(tracing_subscriber::EnvFilter::from_env("FIND_UP_TRACE"))
            .try_init();
    });
}

#[derive(Default)]
struct Formatter {}

impl<S> tracing_subscriber::Layer<S> for Formatter
where
    S: tracing::Subscriber + std::fmt::Debug,
{
    fn on_event(&self, event: &tracing::Event<'_>, _: tracing_subscriber::layer::Context<'_, S>) {
        let level = *event.metadata().level();
        event.record(&mut Data { level });
    }
}

struct Data {
    level: tracing::Level,
}

impl tracing::field::Visit for Data {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            eprintln!("[{}] {value:?}", self.level);
        } else {
            eprintln!("[{}] {} = {value:?}", self.level, field.name());
        }
    }
}

pub fn depth(depth: usize) -> String {
    format!("Depth: {depth}")
}
