//! Mock DOM for browser testing
//!
//! Just enough of a document to host the calculator page without a
//! browser: a read-only display input, keypad buttons, and a log of the
//! events dispatched at them.

use std::collections::HashMap;

use crate::session::DisplaySink;

/// Element id of the calculator display
pub const DISPLAY_ID: &str = "display";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Form value (`value` attribute)
    #[must_use]
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }

    /// Returns true for `readonly` form controls
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.attributes.contains_key("readonly")
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed anywhere in the document
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
    },
    /// Text typed directly into an input element
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value entered
        value: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: a read-only display input
    ///
    /// Keypad buttons are added separately (see `MockDomKeypadExt`).
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("input")
            .with_id(DISPLAY_ID)
            .with_attr("type", "text")
            .with_attr("readonly", "")
            .with_attr("value", "")
            .with_class("display");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone());
        dom.register_element(display);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a form control's value by ID
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(DomElement::value)
    }

    /// Sets a form control's value by ID
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.attributes
                .insert("value".to_string(), value.to_string());
        }
    }

    /// Dispatches an event
    ///
    /// Typing into a read-only control is swallowed, everything else is
    /// only recorded; the page reacts to clicks and keys through its driver.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::Input { element_id, value } = &event {
            let editable = self
                .elements
                .get(element_id)
                .is_some_and(|elem| !elem.is_readonly());
            if editable {
                self.set_value(element_id, value);
            }
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

impl DisplaySink for MockDom {
    fn render(&mut self, text: &str) {
        self.set_value(DISPLAY_ID, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("keypad-btn")
            .with_attr("data-key", "7");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("keypad-btn"));
        assert!(!elem.has_class("display"));
        assert_eq!(elem.get_attr("data-key"), Some("7"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_with_child() {
        let parent = DomElement::new("div").with_child(DomElement::new("span").with_text("child"));
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].text_content, "child");
    }

    #[test]
    fn test_dom_element_value_defaults_empty() {
        assert_eq!(DomElement::new("input").value(), "");
    }

    #[test]
    fn test_dom_element_readonly() {
        assert!(DomElement::new("input").with_attr("readonly", "").is_readonly());
        assert!(!DomElement::new("input").is_readonly());
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert!(matches!(DomEvent::click("btn"), DomEvent::Click { element_id } if element_id == "btn"));
        assert!(matches!(DomEvent::key_down("Enter"), DomEvent::KeyDown { key } if key == "Enter"));
        assert!(matches!(
            DomEvent::input("display", "12"),
            DomEvent::Input { element_id, value } if element_id == "display" && value == "12"
        ));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_new_is_empty() {
        let dom = MockDom::new();
        assert_eq!(dom.root.id, "root");
        assert!(dom.get_element(DISPLAY_ID).is_none());
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_calculator_page_has_readonly_display() {
        let dom = MockDom::calculator();
        let display = dom.get_element(DISPLAY_ID).unwrap();
        assert_eq!(display.tag, "input");
        assert!(display.is_readonly());
        assert_eq!(dom.get_value(DISPLAY_ID), Some(""));
    }

    #[test]
    fn test_set_value() {
        let mut dom = MockDom::calculator();
        dom.set_value(DISPLAY_ID, "42");
        assert_eq!(dom.get_value(DISPLAY_ID), Some("42"));
    }

    #[test]
    fn test_set_value_missing_element_is_ignored() {
        let mut dom = MockDom::calculator();
        dom.set_value("nope", "42");
        assert_eq!(dom.get_value("nope"), None);
    }

    #[test]
    fn test_typing_into_display_is_swallowed() {
        let mut dom = MockDom::calculator();
        dom.set_value(DISPLAY_ID, "3 + ");
        dom.dispatch_event(DomEvent::input(DISPLAY_ID, "hello"));
        assert_eq!(dom.get_value(DISPLAY_ID), Some("3 + "));
        assert_eq!(dom.event_history().len(), 1);
    }

    #[test]
    fn test_typing_into_editable_input_updates_value() {
        let mut dom = MockDom::calculator();
        dom.register_element(DomElement::new("input").with_id("notes"));
        dom.dispatch_event(DomEvent::input("notes", "hi"));
        assert_eq!(dom.get_value("notes"), Some("hi"));
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::calculator();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("Enter"));
        assert_eq!(
            dom.event_history(),
            [DomEvent::click("btn-1"), DomEvent::key_down("Enter")]
        );
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_mock_dom_is_display_sink() {
        let mut dom = MockDom::calculator();
        dom.render("0.33333333");
        assert_eq!(dom.get_value(DISPLAY_ID), Some("0.33333333"));
    }
}
