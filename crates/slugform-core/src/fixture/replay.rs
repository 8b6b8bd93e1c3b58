//! Build a page from a fixture, replay its steps, report the final state.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::{Fixture, FixtureError, Step};
use crate::config::StepperConfig;
use crate::dom::{Dom, Element, ElementId, Selector};
use crate::form_sync::FormSync;
use crate::stepper::QuantityStepper;
use crate::ui::{DefaultAction, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementState {
    pub tag: String,
    pub value: String,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// 1-based position in the script.
    pub step: usize,
    pub kind: &'static str,
    pub target: String,
    /// Labels of the elements the target matched.
    pub matched: Vec<String>,
    /// Only for clicks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<DefaultAction>,
}

/// Final state of every element, keyed by [`Element::label`].
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepOutcome>,
    pub elements: BTreeMap<String, ElementState>,
}

impl ReplayReport {
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.elements.get(label).map(|el| el.value.as_str())
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn has_class(&self, label: &str, class: &str) -> bool {
        self.elements
            .get(label)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }
}

fn build_dom(fixture: &Fixture) -> Result<Dom, FixtureError> {
    let mut dom = Dom::new();
    let mut by_id: HashMap<&str, ElementId> = HashMap::new();

    for (index, spec) in fixture.elements.iter().enumerate() {
        let parent = match spec.parent.as_deref() {
            Some(parent) => Some(*by_id.get(parent).ok_or_else(|| FixtureError::UnknownParent {
                element: index,
                parent: parent.to_string(),
            })?),
            None => None,
        };

        let mut element = Element::new(spec.tag.as_str()).with_value(spec.value.as_str());
        for class in &spec.classes {
            element = element.with_class(class.as_str());
        }
        for (name, value) in &spec.attrs {
            element = element.with_attr(name.as_str(), value.as_str());
        }
        if let Some(id) = spec.id.as_deref() {
            element = element.with_id(id);
        }

        let handle = dom.append(parent, element);
        if let Some(id) = spec.id.as_deref() {
            if by_id.insert(id, handle).is_some() {
                return Err(FixtureError::DuplicateId(id.to_string()));
            }
        }
    }
    Ok(dom)
}

/// Builds the page described by `fixture`, mounting slug syncs first and
/// steppers after, each in fixture order.
pub fn build_page(fixture: &Fixture, stepper_cfg: &StepperConfig) -> Result<Page, FixtureError> {
    let mut page = Page::new(build_dom(fixture)?);

    for sync in &fixture.slug_sync {
        let source = Selector::parse(&sync.source)?;
        let destination = Selector::parse(&sync.destination)?;
        let binder = FormSync::bind(page.dom(), &source, &destination);
        page.mount(binder);
    }
    for stepper in &fixture.stepper {
        let controls = Selector::parse(&stepper.controls)?;
        let component = QuantityStepper::bind(page.dom(), &controls, stepper_cfg)?;
        page.mount(component);
    }
    Ok(page)
}

fn labels(dom: &Dom, ids: &[ElementId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| dom.get(id).map(|el| el.label(id)))
        .collect()
}

/// Replays the fixture's steps and reports the resulting element states.
pub fn replay(fixture: &Fixture, stepper_cfg: &StepperConfig) -> Result<ReplayReport, FixtureError> {
    let mut page = build_page(fixture, stepper_cfg)?;
    tracing::info!(
        elements = page.dom().len(),
        components = page.component_count(),
        steps = fixture.steps.len(),
        "replaying fixture"
    );

    let mut outcomes = Vec::with_capacity(fixture.steps.len());
    for (index, step) in fixture.steps.iter().enumerate() {
        let selector = Selector::parse(step.target())?;
        let targets = page.dom().query_all(&selector);
        if targets.is_empty() {
            return Err(FixtureError::NoMatch {
                step: index + 1,
                selector: step.target().to_string(),
            });
        }

        let (kind, default_action) = match step {
            Step::Input { value, .. } => {
                for &target in &targets {
                    page.type_into(target, value);
                }
                ("input", None)
            }
            Step::KeyUp { .. } => {
                for &target in &targets {
                    page.input(target);
                }
                ("key_up", None)
            }
            Step::Click { .. } => {
                let mut outcome = DefaultAction::Allow;
                for &target in &targets {
                    if page.click(target).is_prevented() {
                        outcome = DefaultAction::Prevent;
                    }
                }
                ("click", Some(outcome))
            }
        };

        outcomes.push(StepOutcome {
            step: index + 1,
            kind,
            target: step.target().to_string(),
            matched: labels(page.dom(), &targets),
            default_action,
        });
    }

    let elements = page
        .dom()
        .iter()
        .map(|(id, el)| {
            (
                el.label(id),
                ElementState {
                    tag: el.tag.clone(),
                    value: el.value.clone(),
                    classes: el.classes.iter().cloned().collect(),
                },
            )
        })
        .collect();

    Ok(ReplayReport {
        steps: outcomes,
        elements,
    })
}
