use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref ENTITIES_CREATED: CounterVec = register_counter_vec!(
        "entities_created_total",
        "Number of created quizzes, questions and answers",
        &["entity"]
    )
    .expect("entities_created_total registers once");
    pub static ref ENTITIES_DELETED: CounterVec = register_counter_vec!(
        "entities_deleted_total",
        "Number of deleted quizzes, questions and answers",
        &["entity"]
    )
    .expect("entities_deleted_total registers once");
}

/// Used when `LOG_LEVEL` is unset or unparsable. Request traces from the
/// `TraceLayer` stay visible, per-statement sqlx logs do not.
const DEFAULT_DIRECTIVES: &str = "quiz_service=info,tower_http=debug,sqlx=warn,info";

fn filter_from(level: Option<&str>) -> EnvFilter {
    level
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn span_events_from(flag: Option<&str>) -> FmtSpan {
    match flag {
        Some(value) if value.eq_ignore_ascii_case("true") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::NONE,
    }
}

/// Installs the global subscriber. `LOG_LEVEL` takes `EnvFilter` directives,
/// `INCLUDE_SPAN_EVENTS=true` adds span enter/exit lines.
pub fn init_tracing() {
    let level = std::env::var("LOG_LEVEL").ok();
    let span_events = std::env::var("INCLUDE_SPAN_EVENTS").ok();

    tracing_subscriber::registry()
        .with(filter_from(level.as_deref()))
        .with(fmt::layer().with_span_events(span_events_from(span_events.as_deref())))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_broken_level_uses_defaults() {
        assert_eq!(filter_from(None).to_string(), EnvFilter::new(DEFAULT_DIRECTIVES).to_string());
        assert_eq!(
            filter_from(Some("quiz_service=loud")).to_string(),
            EnvFilter::new(DEFAULT_DIRECTIVES).to_string()
        );
    }

    #[test]
    fn explicit_level_wins() {
        assert_eq!(filter_from(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn span_events_need_true() {
        assert_eq!(span_events_from(Some("TRUE")), FmtSpan::ENTER | FmtSpan::EXIT);
        assert_eq!(span_events_from(Some("yes")), FmtSpan::NONE);
        assert_eq!(span_events_from(None), FmtSpan::NONE);
    }
}
