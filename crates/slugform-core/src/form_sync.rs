//! Auto-slug binder: keeps a slug field in step with a title field until the
//! user edits the slug field directly.

use crate::dom::{Dom, ElementId, Selector};
use crate::slug::slugify;
use crate::ui::Component;

/// One-way flag: set on the first direct edit of the destination, never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditLatch {
    user_edited: bool,
}

impl EditLatch {
    pub fn is_set(self) -> bool {
        self.user_edited
    }

    pub fn set(&mut self) {
        self.user_edited = true;
    }
}

/// Binds source fields to destination fields.
///
/// Selectors are resolved once, when bound; elements appended afterwards are
/// not picked up. Every matching destination receives the slug, and one latch
/// covers all of them.
#[derive(Debug, Clone)]
pub struct FormSync {
    sources: Vec<ElementId>,
    destinations: Vec<ElementId>,
    latch: EditLatch,
}

impl FormSync {
    pub fn bind(dom: &Dom, source: &Selector, destination: &Selector) -> Self {
        let sources = dom.query_all(source);
        let destinations = dom.query_all(destination);
        if sources.is_empty() || destinations.is_empty() {
            tracing::debug!(
                source = %source,
                destination = %destination,
                sources = sources.len(),
                destinations = destinations.len(),
                "slug sync bound with no effect"
            );
        }
        Self {
            sources,
            destinations,
            latch: EditLatch::default(),
        }
    }

    pub fn latch(&self) -> EditLatch {
        self.latch
    }
}

impl Component for FormSync {
    fn on_input(&mut self, dom: &mut Dom, target: ElementId) {
        if self.destinations.contains(&target) && !self.latch.is_set() {
            tracing::debug!(element = target.index(), "slug field edited by user; auto-sync off");
            self.latch.set();
        }

        if self.sources.contains(&target) && !self.latch.is_set() {
            let slug = slugify(dom.value(target));
            for &dest in &self.destinations {
                dom.set_value(dest, slug.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::ui::Page;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    fn page() -> (Page, ElementId, ElementId) {
        let mut dom = Dom::new();
        let name = dom.append(None, Element::new("input").with_id("name"));
        let slug = dom.append(None, Element::new("input").with_id("slug"));
        let sync = FormSync::bind(&dom, &sel("#name"), &sel("#slug"));
        let mut page = Page::new(dom);
        page.mount(sync);
        (page, name, slug)
    }

    #[test]
    fn typing_in_source_fills_destination() {
        let (mut page, name, slug) = page();
        page.type_into(name, "My");
        assert_eq!(page.dom().value(slug), "my");
        page.type_into(name, "My Title");
        assert_eq!(page.dom().value(slug), "my-title");
    }

    #[test]
    fn destination_edit_stops_sync_for_good() {
        let (mut page, name, slug) = page();
        page.type_into(name, "My Title");
        page.type_into(slug, "custom");
        page.type_into(name, "Another Title");
        assert_eq!(page.dom().value(slug), "custom");

        // Clearing the destination does not re-arm the sync.
        page.type_into(slug, "");
        page.type_into(name, "Third");
        assert_eq!(page.dom().value(slug), "");
    }

    #[test]
    fn unrelated_input_is_ignored() {
        let mut dom = Dom::new();
        let name = dom.append(None, Element::new("input").with_id("name"));
        let slug = dom.append(None, Element::new("input").with_id("slug"));
        let other = dom.append(None, Element::new("input").with_id("other"));
        let mut sync = FormSync::bind(&dom, &sel("#name"), &sel("#slug"));

        dom.set_value(other, "Hello");
        sync.on_input(&mut dom, other);
        assert!(!sync.latch().is_set());
        assert_eq!(dom.value(slug), "");

        dom.set_value(name, "Hello");
        sync.on_input(&mut dom, name);
        assert_eq!(dom.value(slug), "hello");
    }

    #[test]
    fn fans_out_to_every_destination() {
        let mut dom = Dom::new();
        let name = dom.append(None, Element::new("input").with_id("name"));
        let a = dom.append(None, Element::new("input").with_class("slug"));
        let b = dom.append(None, Element::new("input").with_class("slug"));
        let mut page = Page::new(dom.clone());
        page.mount(FormSync::bind(&dom, &sel("#name"), &sel(".slug")));

        page.type_into(name, "Shared Name");
        assert_eq!(page.dom().value(a), "shared-name");
        assert_eq!(page.dom().value(b), "shared-name");

        // Editing either destination latches the whole binding.
        page.type_into(b, "mine");
        page.type_into(name, "Changed");
        assert_eq!(page.dom().value(a), "shared-name");
        assert_eq!(page.dom().value(b), "mine");
    }

    #[test]
    fn same_field_as_source_and_destination_latches_first() {
        let mut dom = Dom::new();
        let field = dom.append(None, Element::new("input").with_id("both"));
        let mut sync = FormSync::bind(&dom, &sel("#both"), &sel("#both"));
        dom.set_value(field, "Keep Me");
        sync.on_input(&mut dom, field);
        assert!(sync.latch().is_set());
        assert_eq!(dom.value(field), "Keep Me");
    }

    #[test]
    fn unmatched_selectors_are_a_no_op() {
        let mut dom = Dom::new();
        let name = dom.append(None, Element::new("input").with_id("name"));
        let mut sync = FormSync::bind(&dom, &sel("#name"), &sel("#missing"));
        dom.set_value(name, "Title");
        sync.on_input(&mut dom, name);
        assert_eq!(dom.value(name), "Title");
        assert!(!sync.latch().is_set());
    }
}
