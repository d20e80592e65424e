//! Lowering of typed include handles into runtime [`Include`] descriptors.

use crate::include::Include;
use crate::relation::RelationDef;

use super::builder::SelectColumns;
use super::handle::IncludeHandle;

/// Renders a chain of include handles into [`Include`] nodes.
///
/// Handles are stored newest-first; the rest of the chain renders before the
/// head so the output follows the order of the `.with()` calls.
pub trait RenderIncludes {
    fn render_into(self, out: &mut Vec<Include>);
}

impl RenderIncludes for () {
    fn render_into(self, _out: &mut Vec<Include>) {}
}

impl<R, Nested, Cols, Rest> RenderIncludes for (IncludeHandle<R, Nested, Cols>, Rest)
where
    R: RelationDef,
    Nested: RenderIncludes,
    Cols: SelectColumns,
    Rest: RenderIncludes,
{
    fn render_into(self, out: &mut Vec<Include>) {
        let (handle, rest) = self;
        rest.render_into(out);
        out.push(handle.render());
    }
}

impl<R, Nested, Cols> IncludeHandle<R, Nested, Cols>
where
    R: RelationDef,
    Nested: RenderIncludes,
    Cols: SelectColumns,
{
    fn render(self) -> Include {
        let mut nested = Vec::new();
        self.nested.render_into(&mut nested);

        let mut node = Include::new(R::NAME);
        if let Some(mut fields) = self.cols.into_fields() {
            // The id keeps the decoded row addressable; whole-record nested
            // includes need their attribute selected to be fetched.
            let required = core::iter::once("id")
                .chain(nested.iter().filter(|n| n.fields.is_none()).map(|n| n.relation.as_str()));
            for name in required {
                if !fields.iter().any(|f| f == name) {
                    fields.push(name.to_string());
                }
            }
            node = node.fields(fields);
        }
        node.nested = nested;
        node
    }
}
