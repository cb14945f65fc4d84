// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search box.
//!
//! The page fetches its content index, hands the parsed array to
//! `new SearchWidget(pages)`, and calls `render(term)` on every input event.
//! Key presses go through `keydown`, which answers with what to do instead of
//! touching the DOM itself.

use std::cell::RefCell;

use js_sys::Date;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::shell::{Action, Focus, FocusState, Key, KeyPress, SearchView};
use crate::types::Page;
use crate::widget::{self, WidgetOptions};

/// Rendered search box contents for one term.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderOutput {
    toolbar: String,
    results: String,
    count: usize,
    elapsed_ms: f64,
}

/// What the host should do after a key press.
#[derive(Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
enum KeyOutput {
    Show,
    Hide,
    Open { index: usize },
    FocusInput,
    FocusLink { index: usize },
    Ignore,
}

impl From<Action> for KeyOutput {
    fn from(action: Action) -> Self {
        match action {
            Action::Show => KeyOutput::Show,
            Action::Hide => KeyOutput::Hide,
            Action::Open(index) => KeyOutput::Open { index },
            Action::Focus(Focus::Input) => KeyOutput::FocusInput,
            Action::Focus(Focus::Link(index)) => KeyOutput::FocusLink { index },
            Action::Ignore => KeyOutput::Ignore,
        }
    }
}

#[wasm_bindgen(js_name = "SearchWidget")]
pub struct WasmSearchWidget {
    inner: widget::SearchWidget,
    focus: RefCell<FocusState>,
    mobile: bool,
}

#[wasm_bindgen(js_class = "SearchWidget")]
impl WasmSearchWidget {
    /// Build from the parsed content index array.
    #[wasm_bindgen(constructor)]
    pub fn new(
        pages: JsValue,
        options: Option<JsValue>,
        mobile: Option<bool>,
    ) -> Result<WasmSearchWidget, JsValue> {
        let pages: Vec<Page> = from_value(pages).map_err(|e| e.to_string())?;
        // Missing keys default; a wrongly typed value is the caller's bug
        let options: WidgetOptions = match options {
            Some(opts) => from_value(opts).map_err(|e| format!("invalid options: {e}"))?,
            None => WidgetOptions::default(),
        };
        Ok(Self::from_widget(
            widget::SearchWidget::with_options(&pages, options),
            mobile.unwrap_or(false),
        ))
    }

    /// Build from the raw JSON text. A bad index yields an empty widget.
    #[wasm_bindgen(js_name = "fromJson")]
    pub fn from_json(json: &str, mobile: Option<bool>) -> WasmSearchWidget {
        Self::from_widget(widget::initialize_from_json(json), mobile.unwrap_or(false))
    }

    fn from_widget(inner: widget::SearchWidget, mobile: bool) -> Self {
        Self {
            inner,
            focus: RefCell::new(FocusState::new()),
            mobile,
        }
    }

    #[wasm_bindgen(js_name = "blockCount")]
    pub fn block_count(&self) -> usize {
        self.inner.block_count()
    }

    /// Renderable results as plain objects.
    pub fn query(&self, term: &str) -> Result<JsValue, JsValue> {
        to_value(&self.inner.query(term)).map_err(|e| e.to_string().into())
    }

    /// Toolbar and results markup for `term`.
    pub fn render(&self, term: &str) -> Result<JsValue, JsValue> {
        let start = Date::now();
        let view = SearchView::from_query(term, self.inner.query(term));
        let count = view.link_count();
        self.focus.borrow_mut().set_links(count);

        let output = RenderOutput {
            toolbar: view.toolbar(self.mobile),
            results: view.render(),
            count,
            elapsed_ms: Date::now() - start,
        };
        to_value(&output).map_err(|e| e.to_string().into())
    }

    /// Feed a `KeyboardEvent.key`; unknown keys are ignored.
    pub fn keydown(&self, key: &str, ctrl: bool) -> Result<JsValue, JsValue> {
        let key = match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Enter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            "/" => Some(Key::Slash),
            _ => None,
        };
        let output = match key {
            Some(key) => KeyOutput::from(self.focus.borrow_mut().handle(KeyPress { key, ctrl })),
            None => KeyOutput::Ignore,
        };
        to_value(&output).map_err(|e| e.to_string().into())
    }

    /// A click landed outside the search box.
    pub fn dismiss(&self) -> Result<JsValue, JsValue> {
        let output = KeyOutput::from(self.focus.borrow_mut().dismiss());
        to_value(&output).map_err(|e| e.to_string().into())
    }
}
