//! Quantity stepper: increment/decrement controls bound to a numeric field
//! with a floor at zero.
//!
//! The field and the decrement control are located relative to the clicked
//! control: first the enclosing container, then descendants of it. The
//! decrement control is marked inactive (a class) when a decrease leaves the
//! quantity at zero and reactivated as soon as the quantity is nonzero.

mod action;

pub use action::{parse_quantity, StepAction};

use crate::config::StepperConfig;
use crate::dom::{Dom, ElementId, Selector, SelectorError};
use crate::ui::{Component, DefaultAction};

/// Parsed form of [`StepperConfig`].
#[derive(Debug, Clone)]
struct Layout {
    container: Selector,
    field: Selector,
    decrease: Selector,
    action_attribute: String,
    inactive_class: String,
}

impl TryFrom<&StepperConfig> for Layout {
    type Error = SelectorError;

    fn try_from(cfg: &StepperConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            container: Selector::parse(&cfg.container_selector)?,
            field: Selector::parse(&cfg.field_selector)?,
            decrease: Selector::parse(&cfg.decrease_selector)?,
            action_attribute: cfg.action_attribute.clone(),
            inactive_class: cfg.inactive_class.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct QuantityStepper {
    controls: Vec<ElementId>,
    layout: Layout,
}

impl QuantityStepper {
    /// Binds every element matching `controls` (resolved now).
    pub fn bind(dom: &Dom, controls: &Selector, cfg: &StepperConfig) -> Result<Self, SelectorError> {
        let layout = Layout::try_from(cfg)?;
        let bound = dom.query_all(controls);
        if bound.is_empty() {
            tracing::debug!(selector = %controls, "stepper bound to no controls");
        }
        Ok(Self {
            controls: bound,
            layout,
        })
    }

    pub fn controls(&self) -> &[ElementId] {
        &self.controls
    }

    fn container_of(&self, dom: &Dom, control: ElementId) -> Option<ElementId> {
        dom.closest(control, &self.layout.container)
            .or_else(|| dom.get(control).and_then(|el| el.parent()))
    }

    fn step(&self, dom: &mut Dom, control: ElementId, action: StepAction) {
        let Some(container) = self.container_of(dom, control) else {
            tracing::warn!(element = control.index(), "stepper control has no container");
            return;
        };
        let Some(&field) = dom.query_within(container, &self.layout.field).first() else {
            tracing::warn!(
                container = container.index(),
                "no quantity field inside stepper container"
            );
            return;
        };

        let old = parse_quantity(dom.value(field));
        let new = action.apply(old);
        let decrease_controls = dom.query_within(container, &self.layout.decrease);

        if new == 0 && action == StepAction::Decrease {
            for &dec in &decrease_controls {
                dom.add_class(dec, &self.layout.inactive_class);
            }
        }
        if new != 0 {
            for &dec in &decrease_controls {
                dom.remove_class(dec, &self.layout.inactive_class);
            }
        }

        tracing::debug!(field = field.index(), old, new, ?action, "quantity stepped");
        dom.set_value(field, new.to_string());
    }
}

impl Component for QuantityStepper {
    fn on_click(&mut self, dom: &mut Dom, target: ElementId) -> DefaultAction {
        if !self.controls.contains(&target) {
            return DefaultAction::Allow;
        }
        let action = dom
            .attr(target, &self.layout.action_attribute)
            .and_then(|raw| raw.parse::<StepAction>().ok());
        match action {
            Some(action) => {
                self.step(dom, target, action);
                DefaultAction::Prevent
            }
            None => {
                tracing::warn!(
                    element = target.index(),
                    attribute = %self.layout.action_attribute,
                    "stepper control without a known action"
                );
                DefaultAction::Allow
            }
        }
    }
}
