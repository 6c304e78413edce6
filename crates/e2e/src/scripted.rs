//! In-memory scripted reader
//!
//! Implements [`UiReader`] over per-view field maps so the full check suite
//! runs without a browser. Tests script the dashboard's content up front and
//! can queue re-renders that fire when a view is activated, which is how
//! view-switch instability is simulated.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use dashcheck_core::{FieldId, ReadError, UiReader, ViewId};

struct State {
    views: HashMap<ViewId, HashMap<FieldId, String>>,
    active: ViewId,
    /// Re-renders applied when the named view becomes active.
    on_activate: Vec<(ViewId, FieldId, String)>,
}

pub struct ScriptedReader {
    state: RwLock<State>,
}

impl ScriptedReader {
    /// Create a reader whose named view is active and empty.
    pub fn new(active: impl Into<String>) -> Self {
        let active = ViewId::new(active);
        let mut views = HashMap::new();
        views.insert(active.clone(), HashMap::new());
        Self {
            state: RwLock::new(State {
                views,
                active,
                on_activate: Vec::new(),
            }),
        }
    }

    /// Script a view's fields, creating the view if needed.
    pub fn view(self, view: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        {
            let mut state = self.state.write().unwrap();
            let map = state.views.entry(ViewId::new(view)).or_default();
            for (field, text) in fields {
                map.insert(FieldId::new(*field), text.to_string());
            }
        }
        self
    }

    /// Overwrite one field's text in one view.
    pub fn set_text(&self, view: &ViewId, field: &FieldId, text: &str) {
        let mut state = self.state.write().unwrap();
        state
            .views
            .entry(view.clone())
            .or_default()
            .insert(field.clone(), text.to_string());
    }

    /// Queue a re-render: the next time `view` is activated, `field` changes
    /// to `text`.
    pub fn queue_rerender(&self, view: &ViewId, field: &FieldId, text: &str) {
        let mut state = self.state.write().unwrap();
        state
            .on_activate
            .push((view.clone(), field.clone(), text.to_string()));
    }
}

#[async_trait]
impl UiReader for ScriptedReader {
    async fn read_text(&self, field: &FieldId) -> Result<String, ReadError> {
        let state = self.state.read().unwrap();
        state
            .views
            .get(&state.active)
            .and_then(|fields| fields.get(field))
            .cloned()
            .ok_or_else(|| ReadError::NotFound(field.to_string()))
    }

    async fn trigger_view_change(&self, view: &ViewId) -> Result<(), ReadError> {
        let mut state = self.state.write().unwrap();
        if !state.views.contains_key(view) {
            return Err(ReadError::NotInteractable(view.to_string()));
        }

        state.active = view.clone();

        let queued = std::mem::take(&mut state.on_activate);
        let (fire, keep): (Vec<_>, Vec<_>) = queued.into_iter().partition(|(v, _, _)| v == view);
        state.on_activate = keep;
        for (v, field, text) in fire {
            state.views.entry(v).or_default().insert(field, text);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_from_the_active_view_only() {
        let reader = ScriptedReader::new("table")
            .view("table", &[("cell", "$1.00")])
            .view("chart", &[("cell", "$2.00")]);

        let cell = FieldId::new("cell");
        assert_eq!(reader.read_text(&cell).await.unwrap(), "$1.00");

        reader
            .trigger_view_change(&ViewId::new("chart"))
            .await
            .unwrap();
        assert_eq!(reader.read_text(&cell).await.unwrap(), "$2.00");
    }

    #[tokio::test]
    async fn missing_field_is_not_found() {
        let reader = ScriptedReader::new("table");
        let err = reader.read_text(&FieldId::new("nope")).await.unwrap_err();
        assert_eq!(err, ReadError::NotFound("nope".to_string()));
    }

    #[tokio::test]
    async fn unknown_view_is_not_interactable() {
        let reader = ScriptedReader::new("table");
        let err = reader
            .trigger_view_change(&ViewId::new("ghost"))
            .await
            .unwrap_err();
        assert_eq!(err, ReadError::NotInteractable("ghost".to_string()));
    }

    #[tokio::test]
    async fn queued_rerender_fires_on_activation() {
        let reader = ScriptedReader::new("table").view("table", &[("cell", "$1.00")]);
        let table = ViewId::new("table");
        let cell = FieldId::new("cell");

        reader.queue_rerender(&table, &cell, "$9.00");
        assert_eq!(reader.read_text(&cell).await.unwrap(), "$1.00");

        reader.trigger_view_change(&table).await.unwrap();
        assert_eq!(reader.read_text(&cell).await.unwrap(), "$9.00");
    }
}
