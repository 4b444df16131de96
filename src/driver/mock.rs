//! Scripted in-memory driver for unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::error::{Error, Result};

use super::Driver;

#[derive(Default)]
struct MockState {
    nodes: FxHashMap<String, Vec<String>>,
    texts: FxHashMap<String, String>,
    html: FxHashMap<String, String>,
    outer_html: FxHashMap<String, String>,
    tag_names: FxHashMap<String, String>,
    attributes: FxHashMap<(String, String), String>,
    visible: FxHashMap<String, bool>,
    scripts: FxHashMap<String, VecDeque<Value>>,
    current_url: Option<String>,
    content: Option<String>,
    failure: Option<String>,
    calls: Vec<String>,
}

/// Driver answering from canned responses and recording every call.
#[derive(Default)]
pub(crate) struct MockDriver {
    state: Mutex<MockState>,
}

impl MockDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Paths returned by `find(xpath)`.
    pub(crate) fn with_nodes(self, xpath: &str, nodes: &[&str]) -> Self {
        self.state.lock().nodes.insert(
            xpath.to_string(),
            nodes.iter().map(|node| node.to_string()).collect(),
        );
        self
    }

    pub(crate) fn with_text(self, xpath: &str, text: &str) -> Self {
        self.state
            .lock()
            .texts
            .insert(xpath.to_string(), text.to_string());
        self
    }

    pub(crate) fn with_html(self, xpath: &str, html: &str) -> Self {
        self.state
            .lock()
            .html
            .insert(xpath.to_string(), html.to_string());
        self
    }

    pub(crate) fn with_outer_html(self, xpath: &str, html: &str) -> Self {
        self.state
            .lock()
            .outer_html
            .insert(xpath.to_string(), html.to_string());
        self
    }

    pub(crate) fn with_tag_name(self, xpath: &str, tag: &str) -> Self {
        self.state
            .lock()
            .tag_names
            .insert(xpath.to_string(), tag.to_string());
        self
    }

    pub(crate) fn with_attribute(self, xpath: &str, name: &str, value: &str) -> Self {
        self.state
            .lock()
            .attributes
            .insert((xpath.to_string(), name.to_string()), value.to_string());
        self
    }

    pub(crate) fn with_visible(self, xpath: &str, visible: bool) -> Self {
        self.state.lock().visible.insert(xpath.to_string(), visible);
        self
    }

    /// Successive results of `evaluate_script(script)`; the last one repeats.
    pub(crate) fn with_script_results(self, script: &str, results: Vec<Value>) -> Self {
        self.state
            .lock()
            .scripts
            .insert(script.to_string(), results.into());
        self
    }

    pub(crate) fn with_content(self, content: &str) -> Self {
        self.state.lock().content = Some(content.to_string());
        self
    }

    /// Every call fails with [`Error::Driver`] carrying `message`.
    pub(crate) fn failing(self, message: &str) -> Self {
        self.state.lock().failure = Some(message.to_string());
        self
    }

    /// Calls received so far, formatted as `method(args)`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// Number of `find` calls received for `xpath`.
    pub(crate) fn find_calls(&self, xpath: &str) -> usize {
        let expected = format!("find({xpath})");
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| **call == expected)
            .count()
    }

    fn record(&self, call: String) -> Result<parking_lot::MutexGuard<'_, MockState>> {
        let mut state = self.state.lock();
        state.calls.push(call);
        if let Some(message) = state.failure.clone() {
            return Err(Error::driver(message));
        }
        Ok(state)
    }
}

fn missing(what: &str, xpath: &str) -> Error {
    Error::driver(format!("no {what} scripted for {xpath}"))
}

#[async_trait]
impl Driver for MockDriver {
    async fn find(&self, xpath: &str) -> Result<Vec<String>> {
        let state = self.record(format!("find({xpath})"))?;
        Ok(state.nodes.get(xpath).cloned().unwrap_or_default())
    }

    async fn get_text(&self, xpath: &str) -> Result<String> {
        let state = self.record(format!("get_text({xpath})"))?;
        state.texts.get(xpath).cloned().ok_or_else(|| missing("text", xpath))
    }

    async fn get_html(&self, xpath: &str) -> Result<String> {
        let state = self.record(format!("get_html({xpath})"))?;
        state.html.get(xpath).cloned().ok_or_else(|| missing("html", xpath))
    }

    async fn get_outer_html(&self, xpath: &str) -> Result<String> {
        let state = self.record(format!("get_outer_html({xpath})"))?;
        state
            .outer_html
            .get(xpath)
            .cloned()
            .ok_or_else(|| missing("outer html", xpath))
    }

    async fn get_tag_name(&self, xpath: &str) -> Result<String> {
        let state = self.record(format!("get_tag_name({xpath})"))?;
        state
            .tag_names
            .get(xpath)
            .cloned()
            .ok_or_else(|| missing("tag name", xpath))
    }

    async fn get_attribute(&self, xpath: &str, name: &str) -> Result<Option<String>> {
        let state = self.record(format!("get_attribute({xpath}, {name})"))?;
        Ok(state
            .attributes
            .get(&(xpath.to_string(), name.to_string()))
            .cloned())
    }

    async fn is_visible(&self, xpath: &str) -> Result<bool> {
        let state = self.record(format!("is_visible({xpath})"))?;
        state
            .visible
            .get(xpath)
            .copied()
            .ok_or_else(|| missing("visibility", xpath))
    }

    async fn visit(&self, url: &str) -> Result<()> {
        let mut state = self.record(format!("visit({url})"))?;
        state.current_url = Some(url.to_string());
        Ok(())
    }

    async fn get_current_url(&self) -> Result<String> {
        let state = self.record("get_current_url()".to_string())?;
        state
            .current_url
            .clone()
            .ok_or_else(|| Error::driver("no page visited"))
    }

    async fn get_content(&self) -> Result<String> {
        let state = self.record("get_content()".to_string())?;
        state
            .content
            .clone()
            .ok_or_else(|| Error::driver("no content scripted"))
    }

    async fn evaluate_script(&self, script: &str) -> Result<Value> {
        let mut state = self.record(format!("evaluate_script({script})"))?;
        let results = state
            .scripts
            .get_mut(script)
            .ok_or_else(|| missing("result", script))?;

        if results.len() > 1 {
            Ok(results.pop_front().unwrap_or(Value::Null))
        } else {
            Ok(results.front().cloned().unwrap_or(Value::Null))
        }
    }
}
