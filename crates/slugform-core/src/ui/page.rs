use crate::dom::{Dom, ElementId};

use super::{Component, DefaultAction};

/// Element tree plus the components mounted on it.
#[derive(Default)]
pub struct Page {
    dom: Dom,
    components: Vec<Box<dyn Component>>,
}

impl Page {
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            components: Vec::new(),
        }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// Adds a component; components see events in mount order.
    pub fn mount(&mut self, component: impl Component + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Key release in `target`.
    pub fn input(&mut self, target: ElementId) {
        tracing::trace!(element = target.index(), "input event");
        for component in &mut self.components {
            component.on_input(&mut self.dom, target);
        }
    }

    /// User edit: replaces the value of `target`, then fires the key release.
    pub fn type_into(&mut self, target: ElementId, text: &str) {
        self.dom.set_value(target, text);
        self.input(target);
    }

    /// Click on `target`. Prevented if any component prevented it.
    pub fn click(&mut self, target: ElementId) -> DefaultAction {
        tracing::trace!(element = target.index(), "click event");
        let mut outcome = DefaultAction::Allow;
        for component in &mut self.components {
            if component.on_click(&mut self.dom, target).is_prevented() {
                outcome = DefaultAction::Prevent;
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    /// Records what it saw and prevents clicks on one element.
    struct Probe {
        seen: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
        prevent_on: ElementId,
    }

    impl Component for Probe {
        fn on_input(&mut self, dom: &mut Dom, target: ElementId) {
            self.seen
                .borrow_mut()
                .push(format!("input:{}", dom.value(target)));
        }

        fn on_click(&mut self, _dom: &mut Dom, target: ElementId) -> DefaultAction {
            self.seen.borrow_mut().push(format!("click:{}", target.index()));
            if target == self.prevent_on {
                DefaultAction::Prevent
            } else {
                DefaultAction::Allow
            }
        }
    }

    struct Silent;

    impl Component for Silent {}

    #[test]
    fn dispatches_to_components_in_order() {
        let mut dom = Dom::new();
        let field = dom.append(None, Element::new("input"));
        let link = dom.append(None, Element::new("a"));

        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut page = Page::new(dom);
        page.mount(Silent);
        page.mount(Probe {
            seen: seen.clone(),
            prevent_on: link,
        });
        assert_eq!(page.component_count(), 2);

        page.type_into(field, "abc");
        assert_eq!(page.click(field), DefaultAction::Allow);
        assert_eq!(page.click(link), DefaultAction::Prevent);

        assert_eq!(
            *seen.borrow(),
            vec![
                "input:abc".to_string(),
                format!("click:{}", field.index()),
                format!("click:{}", link.index()),
            ]
        );
    }

    #[test]
    fn empty_page_allows_default() {
        let mut dom = Dom::new();
        let link = dom.append(None, Element::new("a"));
        let mut page = Page::new(dom);
        assert_eq!(page.click(link), DefaultAction::Allow);
    }
}
