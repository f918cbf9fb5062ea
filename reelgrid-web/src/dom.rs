//! Element builder - a minimal DOM node with HTML serialization.

use tracing::trace;

/// Tags that never carry text content or children.
const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr"];

/// A DOM-like element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    text: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with optional classes and text content.
    ///
    /// Text is ignored for void elements such as `img` or `input`.
    pub fn create(tag: &str, classes: &[&str], text: &str) -> Self {
        trace!(tag, "Creating element");

        let tag = tag.to_ascii_lowercase();
        let text = if text.is_empty() || VOID_ELEMENTS.contains(&tag.as_str()) {
            None
        } else {
            Some(text.to_string())
        };

        Self {
            tag,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Appends a child and returns the element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    /// Appends a child node.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Lowercased tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Class list in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Own text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Value of attribute `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child nodes.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Finds the first element (self included) carrying `class`, depth first.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Serializes the element and its subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        if !self.classes.is_empty() {
            out.push_str(&format!(r#" class="{}""#, escape_html(&self.classes.join(" "))));
        }
        for (name, value) in &self.attributes {
            out.push_str(&format!(r#" {name}="{}""#, escape_html(value)));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
