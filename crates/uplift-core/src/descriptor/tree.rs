//! Ordered element tree for build descriptors.
//!
//! Names are kept exactly as written (`project`, `m:project`), lookups go by
//! local name, and new children inherit their parent's prefix so a document
//! keeps a single namespace spelling. Comments ride along with the element
//! that follows them (or as trailing comments of the parent), so removing a
//! subtree removes the comments that introduced it.

/// The `<?xml ...?>` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

/// A whole descriptor: header, root element and the comments around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `None` when the source had no header; one is synthesised on write.
    pub declaration: Option<Declaration>,
    /// Comments before the root element.
    pub prolog: Vec<String>,
    pub root: Element,
    /// Comments after the root element.
    pub epilog: Vec<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            declaration: None,
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Qualified name as written in the source.
    pub name: String,
    /// Attributes in source order, unescaped.
    pub attributes: Vec<(String, String)>,
    /// Text content, unescaped. Whitespace-only text is not kept.
    pub text: Option<String>,
    pub children: Vec<Element>,
    /// Comments directly before this element.
    pub leading_comments: Vec<String>,
    /// Comments after the last child.
    pub trailing_comments: Vec<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Namespace prefix, if the name is qualified.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    pub fn is(&self, local: &str) -> bool {
        self.local_name() == local
    }

    /// `local` qualified with this element's prefix.
    pub fn qualify(&self, local: &str) -> String {
        match self.prefix() {
            Some(prefix) => format!("{prefix}:{local}"),
            None => local.to_string(),
        }
    }

    /// A fresh element named `local` in this element's namespace.
    pub fn new_child(&self, local: &str) -> Element {
        Element::new(self.qualify(local))
    }

    /// A fresh text element named `local` in this element's namespace.
    pub fn new_text_child(&self, local: &str, text: &str) -> Element {
        Element::with_text(self.qualify(local), text)
    }

    /// Trimmed text content.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    // ---- lookup ----

    pub fn child(&self, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(local))
    }

    pub fn child_mut(&mut self, local: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.is(local))
    }

    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(local))
    }

    pub fn child_text(&self, local: &str) -> Option<&str> {
        self.child(local).and_then(Element::text)
    }

    /// First element matching `path` (local names) starting at any depth
    /// below this element, in document order. `["properties", "java.version"]`
    /// behaves like the XPath `.//properties/java.version`.
    pub fn find_descendant(&self, path: &[&str]) -> Option<&Element> {
        let (head, rest) = path.split_first()?;
        for child in &self.children {
            if child.is(head) {
                if let Some(found) = child.find_path(rest) {
                    return Some(found);
                }
            }
            if let Some(found) = child.find_descendant(path) {
                return Some(found);
            }
        }
        None
    }

    /// Element at the relative child path `path`; an empty path is `self`.
    pub fn find_path(&self, path: &[&str]) -> Option<&Element> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self
                .children
                .iter()
                .filter(|c| c.is(head))
                .find_map(|c| c.find_path(rest)),
        }
    }

    /// Depth-first, pre-order visit of every element below this one.
    pub fn visit_descendants_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        for child in &mut self.children {
            visit(child);
            child.visit_descendants_mut(visit);
        }
    }

    // ---- mutation ----

    /// Append `child` as the last child and return it.
    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Insert `child` before every existing child and return it.
    pub fn insert_first_child(&mut self, child: Element) -> &mut Element {
        self.children.insert(0, child);
        &mut self.children[0]
    }

    /// Remove every child matching `predicate`; returns how many went.
    pub fn remove_children(&mut self, mut predicate: impl FnMut(&Element) -> bool) -> usize {
        let before = self.children.len();
        self.children.retain(|c| !predicate(c));
        before - self.children.len()
    }

    /// Remove every child matching `predicate`, then append `replacement`.
    /// This is a full replace: nothing of the old subtrees survives.
    pub fn replace_subtree(
        &mut self,
        predicate: impl FnMut(&Element) -> bool,
        replacement: Element,
    ) -> &mut Element {
        self.remove_children(predicate);
        self.push_child(replacement)
    }

    /// The first child named `local`, appended if there is none.
    pub fn get_or_create_child(&mut self, local: &str) -> &mut Element {
        let index = match self.children.iter().position(|c| c.is(local)) {
            Some(index) => index,
            None => {
                let child = self.new_child(local);
                self.children.push(child);
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Set the text of the first child named `local`, creating it at the end
    /// if needed. Returns the previous text.
    pub fn set_child_text(&mut self, local: &str, text: &str) -> Option<String> {
        let child = self.get_or_create_child(local);
        child.text.replace(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut root = Element::new("m:project");
        let props = root.get_or_create_child("properties");
        props.set_child_text("java.version", "1.8");
        let deps = root.get_or_create_child("dependencies");
        let dep = deps.push_child(Element::new("m:dependency"));
        dep.set_child_text("groupId", "g");
        dep.set_child_text("artifactId", "a");
        root
    }

    #[test]
    fn test_new_children_inherit_prefix() {
        let root = sample();
        assert_eq!(root.children[0].name, "m:properties");
        assert_eq!(root.children[0].children[0].name, "m:java.version");
        assert_eq!(root.children[0].local_name(), "properties");
    }

    #[test]
    fn test_unprefixed_qualify() {
        let root = Element::new("project");
        assert_eq!(root.qualify("parent"), "parent");
        assert_eq!(root.prefix(), None);
    }

    #[test]
    fn test_find_descendant_any_depth() {
        let mut root = Element::new("project");
        let profile = root
            .get_or_create_child("profiles")
            .get_or_create_child("profile");
        profile
            .get_or_create_child("properties")
            .set_child_text("java.version", "11");

        let found = root.find_descendant(&["properties", "java.version"]).unwrap();
        assert_eq!(found.text(), Some("11"));
        assert!(root.find_descendant(&["properties", "missing"]).is_none());
    }

    #[test]
    fn test_find_path_result_outlives_query() {
        let root = sample();
        let found = {
            let query = vec!["properties".to_string(), "java.version".to_string()];
            let parts: Vec<&str> = query.iter().map(String::as_str).collect();
            root.find_path(&parts)
        };
        assert_eq!(found.and_then(Element::text), Some("1.8"));
    }

    #[test]
    fn test_insert_first_child() {
        let mut root = sample();
        root.insert_first_child(Element::new("m:parent"));
        assert!(root.children[0].is("parent"));
        assert_eq!(root.children.len(), 3);
    }

    #[test]
    fn test_replace_subtree_removes_all_matches() {
        let mut plugins = Element::new("plugins");
        for v in ["1", "2"] {
            let p = plugins.push_child(Element::new("plugin"));
            p.set_child_text("artifactId", "maven-compiler-plugin");
            p.set_child_text("version", v);
        }
        let mut other = Element::new("plugin");
        other.set_child_text("artifactId", "maven-surefire-plugin");
        plugins.insert_first_child(other);

        let mut replacement = Element::new("plugin");
        replacement.set_child_text("artifactId", "maven-compiler-plugin");
        replacement.set_child_text("version", "3");
        plugins.replace_subtree(
            |p| p.child_text("artifactId") == Some("maven-compiler-plugin"),
            replacement,
        );

        assert_eq!(plugins.children.len(), 2);
        assert_eq!(plugins.children[0].child_text("artifactId"), Some("maven-surefire-plugin"));
        assert_eq!(plugins.children[1].child_text("version"), Some("3"));
    }

    #[test]
    fn test_set_child_text_overwrites() {
        let mut props = Element::new("properties");
        assert_eq!(props.set_child_text("java.version", "1.8"), None);
        assert_eq!(props.set_child_text("java.version", "21"), Some("1.8".to_string()));
        assert_eq!(props.children.len(), 1);
    }

    #[test]
    fn test_visit_descendants_mut() {
        let mut root = sample();
        let mut count = 0;
        root.visit_descendants_mut(&mut |_| count += 1);
        // properties, java.version, dependencies, dependency, groupId, artifactId
        assert_eq!(count, 6);
    }
}
