use std::path::Path;
use std::sync::{Mutex, Once};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

static EVENTS: Mutex<Vec<CapturedEvent>> = Mutex::new(Vec::new());

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A `skipping log line` warning, reduced to what tests compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipWarning {
    pub file_name: String,
    pub line: String,
    pub raw: String,
}

/// Installs the capture subscriber once per test binary.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing::subscriber::set_global_default(tracing_subscriber::registry().with(CaptureLayer))
            .expect("failed to set global tracing subscriber");
    });
}

/// Skip warnings for files under `dir`, in emission order. Tests run in
/// parallel against one global buffer, so each test filters by its own
/// temp dir.
pub fn skip_warnings_under(dir: &Path) -> Vec<SkipWarning> {
    let dir = dir.display().to_string();

    EVENTS
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.level == Level::WARN)
        .filter_map(|e| {
            let file = e.field("file")?;
            if !file.starts_with(&dir) {
                return None;
            }
            Some(SkipWarning {
                file_name: Path::new(file).file_name()?.to_string_lossy().into_owned(),
                line: e.field("line")?.to_string(),
                raw: e.field("raw")?.to_string(),
            })
        })
        .collect()
}

struct CaptureLayer;

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor(&mut fields));

        EVENTS.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldVisitor<'_> {
    // `%` fields and integers both land here; Display wrappers debug-print
    // as their plain text.
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}
