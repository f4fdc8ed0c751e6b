//! [`FormState`] backed by the page's DOM.

use goofycoin_core::{ErrorTarget, FormState, InputField, SelectList, Selection};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

/// Looks up form elements by id on every access; nothing is cached.
#[derive(Debug, Clone)]
pub struct DomForm {
    document: Document,
}

impl DomForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if running in a page.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }

    fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    /// Replace the options of a selection list.
    pub fn set_options(&self, list: SelectList, options: &[Selection]) -> Result<(), JsValue> {
        let Some(select) = self.element::<HtmlSelectElement>(list.as_str()) else {
            tracing::warn!("selection list #{} not found", list.as_str());
            return Ok(());
        };

        select.set_inner_html("");
        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value(&option.text, &option.value)?;
            select.append_child(&element)?;
        }
        Ok(())
    }
}

impl FormState for DomForm {
    fn value(&self, field: InputField) -> String {
        self.element::<HtmlInputElement>(field.as_str())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn selection(&self, list: SelectList) -> Option<Selection> {
        let select = self.element::<HtmlSelectElement>(list.as_str())?;
        let index = u32::try_from(select.selected_index()).ok()?;
        let option = select.item(index)?.dyn_into::<HtmlOptionElement>().ok()?;
        Some(Selection::new(option.value(), option.text()))
    }

    fn set_error(&mut self, target: ErrorTarget, message: &str) {
        match self.element::<HtmlElement>(target.as_str()) {
            Some(slot) => slot.set_inner_text(message),
            None => tracing::warn!("error slot #{} not found", target.as_str()),
        }
    }
}
