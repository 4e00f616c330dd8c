use tracing::field::Visit;
use tracing::{span, Level, Metadata};
use tracing_subscriber::fmt::format::{PrettyVisitor, Writer};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use wasm_bindgen::prelude::*;

const TARGET_PREFIX: &str = "greenhaven";

const NAME_STYLE: &str = "color: inherit; font-weight: bold";
const ORIGIN_STYLE: &str = "color: gray; font-style: italic";
const BODY_STYLE: &str = "color: inherit";

#[derive(Debug, Clone)]
struct SpanFields(String);

/// Prints `greenhaven` events to the browser console with the active span chain.
pub struct ConsoleLayer {
    pub config: ConsoleConfig,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleConfig {
    pub target: bool,
    pub line: bool,
}

pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt::with(
            tracing_subscriber::Registry::default(),
            ConsoleLayer::new(ConsoleConfig::default()),
        ),
    )
}

impl ConsoleLayer {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    fn origin(&self, meta: &Metadata<'_>) -> String {
        if !shows_origin(&self.config, *meta.level()) {
            return String::new();
        }
        match (meta.file(), meta.line()) {
            (Some(file), Some(line)) => format!(" {}:{}", file, line),
            _ => String::new(),
        }
    }

    fn target(&self, meta: &Metadata<'_>) -> String {
        if self.config.target {
            format!(" {}", meta.target())
        } else {
            String::new()
        }
    }
}

fn is_own_target(target: &str) -> bool {
    target.starts_with(TARGET_PREFIX)
}

fn level_style(level: Level) -> &'static str {
    match level {
        Level::TRACE => "color: dodgerblue; background: #444",
        Level::DEBUG => "color: lawngreen; background: #444",
        Level::INFO => "color: whitesmoke; background: #444",
        Level::WARN => "color: orange; background: #444",
        Level::ERROR => "color: red; background: #444",
    }
}

// warnings and errors always carry their origin
fn shows_origin(config: &ConsoleConfig, level: Level) -> bool {
    config.line || level == Level::ERROR || level == Level::WARN
}

fn format_fields(record: impl FnOnce(&mut dyn Visit)) -> String {
    let mut out = String::new();
    {
        let mut visitor = PrettyVisitor::new(Writer::new(&mut out), true);
        record(&mut visitor);
    }
    out
}

/// Span labels, outermost first.
fn join_spans(spans: &[String]) -> String {
    spans.iter().map(|span| format!(" {}", span)).collect()
}

fn span_label(name: &str, fields: Option<&SpanFields>) -> String {
    match fields {
        Some(fields) => format!("{}({})", name, fields.0),
        None => name.to_string(),
    }
}

/// `%c` marks where each console style starts: level, spans, origin, body.
fn console_line(level: Level, spans: &str, location: &str, body: &str) -> String {
    format!("%c{level}%c{spans}%c{location}%c: {body}")
}

impl<S> tracing_subscriber::Layer<S> for ConsoleLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();
        if !is_own_target(meta.target()) {
            return;
        }

        let spans: Vec<String> = ctx
            .event_scope(event)
            .map(|scope| {
                scope
                    .from_root()
                    .map(|span| span_label(span.name(), span.extensions().get::<SpanFields>()))
                    .collect()
            })
            .unwrap_or_default();

        let level = *meta.level();
        let location = format!("{}{}", self.target(meta), self.origin(meta));
        let body = format_fields(|visitor| event.record(visitor));

        log5(
            console_line(level, &join_spans(&spans), &location, &body),
            level_style(level),
            NAME_STYLE,
            ORIGIN_STYLE,
            BODY_STYLE,
        );
    }

    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let fields = format_fields(|visitor| attrs.record(visitor));
        if fields.is_empty() {
            return;
        }
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(SpanFields(fields));
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn log5(message1: String, message2: &str, message3: &str, message4: &str, message5: &str);
}
