use indexmap::IndexMap;

/// One element of a map: a tag name, its attributes in document order, child
/// elements and the concatenated character content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupNode {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<MarkupNode>,
    text: String,
}

impl MarkupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends character content, as a parser does when text is split by children.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// The first attribute present among `names`.
    pub fn attr_any(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|n| self.attr(n))
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MarkupNode::subtree_len).sum::<usize>()
    }

    pub fn find_child(&self, name: &str) -> Option<&MarkupNode> {
        self.children.iter().find(|c| c.name == name)
    }
}
