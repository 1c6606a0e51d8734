//! Mock DOM for testing the page binding without a browser
//!
//! Models just enough of the calculator page: the `display` input field, the
//! keypad buttons, and a log of dispatched events.

use std::collections::HashMap;

/// Id of the page's display input field
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
    /// Element attributes (an input's `value` lives here)
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

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets the `value` attribute (input fields)
    pub fn set_value(&mut self, value: &str) {
        self.attributes
            .insert("value".to_string(), value.to_string());
    }

    /// The `value` attribute, if set
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get_attr("value")
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
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press event
    KeyPress {
        /// The key that was pressed
        key: String,
        /// Whether Ctrl was held
        ctrl: bool,
        /// Whether Shift was held
        shift: bool,
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

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::key_press_with_modifiers(key, false, false)
    }

    /// Creates a key press with modifiers
    #[must_use]
    pub fn key_press_with_modifiers(key: &str, ctrl: bool, shift: bool) -> Self {
        Self::KeyPress {
            key: key.to_string(),
            ctrl,
            shift,
        }
    }
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: a read-only display field initialised to "0"
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("input")
            .with_id(DISPLAY_ID)
            .with_attr("type", "text")
            .with_attr("readonly", "")
            .with_attr("value", "0");

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

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
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

    /// Updates an input's value by ID
    pub fn set_element_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_value(value);
        }
    }

    /// Gets an input's value by ID
    #[must_use]
    pub fn get_element_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(DomElement::value)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Finds the element whose `onclick` attribute equals `handler`
    #[must_use]
    pub fn find_by_onclick(&self, handler: &str) -> Option<&DomElement> {
        self.elements
            .values()
            .find(|e| e.get_attr("onclick") == Some(handler))
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
            .with_attr("onclick", "appendNumber('7')");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("keypad-btn"));
        assert!(!elem.has_class("other"));
        assert_eq!(elem.get_attr("onclick"), Some("appendNumber('7')"));
    }

    #[test]
    fn test_dom_element_value() {
        let mut elem = DomElement::new("input");
        assert_eq!(elem.value(), None);
        elem.set_value("42");
        assert_eq!(elem.value(), Some("42"));
    }

    #[test]
    fn test_dom_element_with_child() {
        let parent = DomElement::new("div").with_child(DomElement::new("span"));
        assert_eq!(parent.children.len(), 1);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_click() {
        assert_eq!(
            DomEvent::click("btn-1"),
            DomEvent::Click {
                element_id: "btn-1".into()
            }
        );
    }

    #[test]
    fn test_dom_event_key_press() {
        let event = DomEvent::key_press("Enter");
        assert!(matches!(
            event,
            DomEvent::KeyPress { ref key, ctrl: false, shift: false } if key == "Enter"
        ));
    }

    #[test]
    fn test_dom_event_key_press_modifiers() {
        let event = DomEvent::key_press_with_modifiers("c", true, false);
        assert!(matches!(event, DomEvent::KeyPress { ctrl: true, .. }));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_calculator_has_display() {
        let dom = MockDom::calculator();
        let display = dom.get_element(DISPLAY_ID).unwrap();
        assert_eq!(display.tag, "input");
        assert_eq!(display.value(), Some("0"));
        assert_eq!(dom.root.children.len(), 1);
    }

    #[test]
    fn test_mock_dom_set_value() {
        let mut dom = MockDom::calculator();
        dom.set_element_value(DISPLAY_ID, "12");
        assert_eq!(dom.get_element_value(DISPLAY_ID), Some("12"));
    }

    #[test]
    fn test_mock_dom_missing_element() {
        let mut dom = MockDom::new();
        dom.set_element_value("nope", "1");
        assert_eq!(dom.get_element_value("nope"), None);
        assert_eq!(dom.get_element_text("nope"), None);
    }

    #[test]
    fn test_mock_dom_register_ignores_empty_id() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div"));
        assert!(dom.get_element("").is_none());
    }

    #[test]
    fn test_mock_dom_get_element_mut() {
        let mut dom = MockDom::calculator();
        dom.get_element_mut(DISPLAY_ID).unwrap().set_text("note");
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("note"));
    }

    #[test]
    fn test_mock_dom_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_press("Enter"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_mock_dom_find_by_onclick() {
        let mut dom = MockDom::new();
        dom.register_element(
            DomElement::new("button")
                .with_id("btn-equals")
                .with_attr("onclick", "calculate()"),
        );
        assert_eq!(dom.find_by_onclick("calculate()").unwrap().id, "btn-equals");
        assert!(dom.find_by_onclick("missing()").is_none());
    }
}
