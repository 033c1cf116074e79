//! DOM list surface
//!
//! Builds, per todo:
//!
//! ```html
//! <li data-id="ID" class="completed">
//!   <span class="todo-text">TEXT</span>
//!   <div class="todo-actions">
//!     <button class="complete-button" data-action="toggle" data-id="ID">Complete</button>
//!     <button class="remove-button" data-action="remove" data-id="ID">Remove</button>
//!   </div>
//! </li>
//! ```

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::view::{
    ACTIONS_CLASS, COMPLETE_BUTTON_CLASS, DATA_ACTION, DATA_ID, ListSurface, REMOVE_BUTTON_CLASS,
    RowAction, RowView, TEXT_CLASS,
};

#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
    container: Option<Element>,
}

impl DomSurface {
    /// Attach to the list element with `list_id`. A missing element turns
    /// every render into a no-op.
    pub fn new(document: Document, list_id: &str) -> Self {
        let container = document.get_element_by_id(list_id);
        if container.is_none() {
            log::warn!("List element #{} not found", list_id);
        }
        Self {
            document,
            container,
        }
    }

    pub fn container(&self) -> Option<&Element> {
        self.container.as_ref()
    }

    fn button(&self, row: &RowView, action: RowAction) -> Result<Element, JsValue> {
        let button = self.document.create_element("button")?;
        let (class, label) = match action {
            RowAction::Toggle => (COMPLETE_BUTTON_CLASS, row.toggle_label()),
            RowAction::Remove => (REMOVE_BUTTON_CLASS, row.remove_label()),
        };
        button.set_class_name(class);
        button.set_attribute(DATA_ACTION, action.as_str())?;
        button.set_attribute(DATA_ID, row.id.as_str())?;
        button.set_text_content(Some(label));
        Ok(button)
    }

    fn build_row(&self, row: &RowView) -> Result<Element, JsValue> {
        let item = self.document.create_element("li")?;
        item.set_class_name(row.row_class());
        item.set_attribute(DATA_ID, row.id.as_str())?;

        let text = self.document.create_element("span")?;
        text.set_class_name(TEXT_CLASS);
        text.set_text_content(Some(&row.text));

        let actions = self.document.create_element("div")?;
        actions.set_class_name(ACTIONS_CLASS);
        actions.append_child(&self.button(row, RowAction::Toggle)?)?;
        actions.append_child(&self.button(row, RowAction::Remove)?)?;

        item.append_child(&text)?;
        item.append_child(&actions)?;
        Ok(item)
    }
}

impl ListSurface for DomSurface {
    fn clear_rows(&mut self) {
        if let Some(container) = &self.container {
            container.set_inner_html("");
        }
    }

    fn append_row(&mut self, row: &RowView) {
        let Some(container) = &self.container else {
            return;
        };
        let appended = self
            .build_row(row)
            .and_then(|item| container.append_child(&item));
        if let Err(e) = appended {
            log::warn!("Failed to render todo {}: {:?}", row.id, e);
        }
    }
}
