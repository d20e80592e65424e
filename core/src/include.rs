//! Include (eager-load) descriptors and the tree flattener.
//!
//! An include tree names the relations to resolve. Flattening walks it in
//! pre-order (node before children, siblings left to right) and produces the
//! dot paths used by the `FETCH` clause and the field paths added to `SELECT`.

/// One node of an include tree.
///
/// `nested` entries describe relations of the *related* record, not of the
/// record that owns this node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Include {
    pub relation: String,
    pub alias: Option<String>,
    pub fields: Option<Vec<String>>,
    pub nested: Vec<Include>,
}

impl Include {
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            ..Self::default()
        }
    }

    /// Sets the alias used in place of the relation name in paths.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Restricts the relation to a subset of fields.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a nested include on the related record.
    #[must_use]
    pub fn with(mut self, nested: Include) -> Self {
        self.nested.push(nested);
        self
    }

    /// The path segment for this node: the alias if present, else the relation.
    pub fn segment(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.relation)
    }

    fn path(&self, parent: &str) -> String {
        if parent.is_empty() {
            self.segment().to_string()
        } else {
            format!("{parent}.{}", self.segment())
        }
    }
}

/// Flattens an include tree into dot paths, one per node, in pre-order.
///
/// ```
/// use sorm_core::include::{Include, flatten_include_paths};
///
/// let tree = [Include::new("author").with(Include::new("company")), Include::new("tags")];
/// assert_eq!(
///     flatten_include_paths(&tree, ""),
///     ["author", "author.company", "tags"]
/// );
/// ```
pub fn flatten_include_paths(includes: &[Include], parent_path: &str) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(includes, parent_path, &mut out);
    out
}

fn flatten_into(includes: &[Include], parent_path: &str, out: &mut Vec<String>) {
    for include in includes {
        let path = include.path(parent_path);
        out.push(path.clone());
        if !include.nested.is_empty() {
            flatten_into(&include.nested, &path, out);
        }
    }
}

/// Collects `<path>.<field>` for every node with a non-empty field list.
///
/// Nodes without fields contribute nothing themselves but their nested
/// includes are still walked.
pub fn collect_include_field_paths(includes: &[Include], parent_path: &str) -> Vec<String> {
    let mut out = Vec::new();
    collect_fields_into(includes, parent_path, &mut out);
    out
}

fn collect_fields_into(includes: &[Include], parent_path: &str, out: &mut Vec<String>) {
    for include in includes {
        let path = include.path(parent_path);
        if let Some(fields) = include.fields.as_deref() {
            out.extend(fields.iter().map(|field| format!("{path}.{field}")));
        }
        if !include.nested.is_empty() {
            collect_fields_into(&include.nested, &path, out);
        }
    }
}

/// Number of nodes in an include tree.
pub fn count_nodes(includes: &[Include]) -> usize {
    includes
        .iter()
        .map(|include| 1 + count_nodes(&include.nested))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Include> {
        vec![
            Include::new("author")
                .fields(["name", "email"])
                .with(Include::new("company").with(Include::new("address").fields(["city"]))),
            Include::new("comments")
                .alias("replies")
                .with(Include::new("user").fields(["name"])),
            Include::new("tags"),
        ]
    }

    #[test]
    fn paths_are_pre_order_one_per_node() {
        let tree = tree();
        let paths = flatten_include_paths(&tree, "");
        assert_eq!(
            paths,
            [
                "author",
                "author.company",
                "author.company.address",
                "replies",
                "replies.user",
                "tags",
            ]
        );
        assert_eq!(paths.len(), count_nodes(&tree));
    }

    #[test]
    fn parent_path_prefixes_every_entry() {
        let paths = flatten_include_paths(&[Include::new("a").with(Include::new("b"))], "root");
        assert_eq!(paths, ["root.a", "root.a.b"]);
    }

    #[test]
    fn field_paths_skip_nodes_without_fields_but_walk_children() {
        let paths = collect_include_field_paths(&tree(), "");
        assert_eq!(
            paths,
            [
                "author.name",
                "author.email",
                "author.company.address.city",
                "replies.user.name",
            ]
        );
    }

    #[test]
    fn empty_field_list_contributes_nothing() {
        let paths = collect_include_field_paths(&[Include::new("a").fields(Vec::<String>::new())], "");
        assert!(paths.is_empty());
    }

    #[test]
    fn empty_tree_yields_nothing() {
        assert!(flatten_include_paths(&[], "").is_empty());
        assert!(collect_include_field_paths(&[], "").is_empty());
    }
}
