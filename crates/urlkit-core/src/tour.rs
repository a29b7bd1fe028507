//! Guided walkthrough of URL, query-builder and session-configuration APIs.
//!
//! `run` performs every step offline and returns what each step observed, so
//! the CLI can print it and tests can pin it.

use serde::Serialize;

use crate::components::{QueryItem, UrlComponents};
use crate::session::{Session, SessionConfiguration, UrlCache};
use crate::url_model::UrlRef;

/// Stand-in for an absent optional value.
pub const NIL: &str = "nil";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub section: &'static str,
    pub label: String,
    pub value: String,
}

#[derive(Default)]
struct Recorder {
    section: &'static str,
    steps: Vec<Observation>,
}

impl Recorder {
    fn section(&mut self, name: &'static str) {
        self.section = name;
    }

    fn note(&mut self, label: impl Into<String>, value: impl ToString) {
        self.steps.push(Observation {
            section: self.section,
            label: label.into(),
            value: value.to_string(),
        });
    }

    fn opt<T: ToString>(&mut self, label: impl Into<String>, value: Option<T>) {
        let value = value
            .map(|v| v.to_string())
            .unwrap_or_else(|| NIL.to_string());
        self.note(label, value);
    }
}

fn inspect(rec: &mut Recorder, name: &str, url: Option<&UrlRef>) {
    rec.opt(format!("{name}.absolute_string"), url.map(UrlRef::absolute_string));
    rec.opt(format!("{name}.scheme"), url.map(UrlRef::scheme));
    rec.opt(format!("{name}.host"), url.and_then(UrlRef::host));
    rec.opt(format!("{name}.path"), url.map(UrlRef::path));
    rec.opt(format!("{name}.query"), url.and_then(UrlRef::query));
    rec.opt(format!("{name}.base_url"), url.and_then(UrlRef::base_url));
}

fn components(rec: &mut Recorder, c: Option<&UrlComponents>) {
    rec.opt("components.url", c.and_then(UrlComponents::url));
    rec.opt("components.string", c.map(UrlComponents::string));
    let items = c.and_then(UrlComponents::query_items).map(|items| {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    });
    rec.opt("components.query_items", items.map(|s| format!("[{s}]")));
}

fn cache_capacities(rec: &mut Recorder, name: &str, conf: &SessionConfiguration) {
    let cache = conf.url_cache.as_ref();
    rec.opt(
        format!("{name}.url_cache.disk_capacity"),
        cache.map(UrlCache::disk_capacity),
    );
    rec.opt(
        format!("{name}.url_cache.memory_capacity"),
        cache.map(UrlCache::memory_capacity),
    );
}

/// Runs every step of the walkthrough and returns the observations in order.
pub fn run() -> Vec<Observation> {
    let mut rec = Recorder::default();

    rec.section("URL from string");
    let url = UrlRef::parse("https://itunes.apple.com/search?media=music&entity=song&term=abba");
    inspect(&mut rec, "url", url.as_ref());

    rec.section("URL relative to a base");
    let base = UrlRef::parse("https://itunes.apple.com");
    let relative = UrlRef::parse_relative("search", base.as_ref());
    inspect(&mut rec, "relative_url", relative.as_ref());

    rec.section("Query components");
    let mut comps = UrlComponents::parse("https://itunes.apple.com/search?media=music&entity=song");
    if let Some(c) = comps.as_mut() {
        c.append_query_item(QueryItem::pair("term", "crowded house"));
    }
    components(&mut rec, comps.as_ref());
    if let Some(c) = comps.as_mut() {
        c.append_query_item(QueryItem::pair("emoji", "😻"));
    }
    components(&mut rec, comps.as_ref());

    rec.section("Sessions");
    let shared = Session::shared();
    rec.note(
        "shared.allows_cellular_access",
        shared.configuration().allows_cellular_access,
    );
    // Only the returned copy changes; the shared session keeps its value.
    let mut copy = shared.configuration();
    copy.allows_cellular_access = false;
    rec.note("copy.allows_cellular_access", copy.allows_cellular_access);
    rec.note(
        "shared.allows_cellular_access after editing a copy",
        shared.configuration().allows_cellular_access,
    );

    let mut my_default = SessionConfiguration::default();
    rec.note("my_default.allows_cellular_access", my_default.allows_cellular_access);
    my_default.allows_cellular_access = false;
    rec.note(
        "my_default.allows_cellular_access after set",
        my_default.allows_cellular_access,
    );
    let my_session = Session::new(my_default.clone());
    rec.note(
        "my_session.allows_cellular_access",
        my_session.configuration().allows_cellular_access,
    );
    let default_session = Session::new(SessionConfiguration::default());
    rec.note(
        "default_session.allows_cellular_access",
        default_session.configuration().allows_cellular_access,
    );

    rec.section("Caches");
    cache_capacities(&mut rec, "my_default", &my_default);
    let mut ephemeral = SessionConfiguration::ephemeral();
    cache_capacities(&mut rec, "ephemeral", &ephemeral);
    ephemeral.url_cache = Some(UrlCache::new(512_000, 10_000_000, None));
    rec.opt(
        "ephemeral.url_cache.disk_capacity after assigning a cache",
        ephemeral.url_cache.as_ref().map(UrlCache::disk_capacity),
    );

    tracing::debug!("tour finished with {} observations", rec.steps.len());
    rec.steps
}
