//! Animal shelter: a dog moves from intake through vetting and foster or
//! hospice care to adoption.

use crate::builder::{LifecycleBuilder, TransitionBuilder};
use crate::core::{StateHistory, StateTransition};
use crate::engine::{Lifecycle, Stateful};
use crate::table::ConfigurationError;
use crate::{event_enum, state_enum};
use serde::{Deserialize, Serialize};

state_enum! {
    pub enum ShelterState {
        Sheltered,
        Rescued,
        Vetted,
        Fostered,
        Hospiced,
        Adopted,
    }
    final: [Adopted]
}

event_enum! {
    pub enum ShelterEvent {
        Rescue,
        Vet,
        Foster,
        Hospice,
        Adopt,
    }
}

pub type ShelterLifecycle = Lifecycle<ShelterState, ShelterEvent, Dog>;

/// Result of a veterinary visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vetting {
    pub heartworms: bool,
    pub fixed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug)]
pub struct Dog {
    name: String,
    age: u32,
    state: ShelterState,
    vettings: Vec<Vetting>,
    foster_parent: Option<Person>,
    hospice_provider: Option<Person>,
    adoptive_parent: Option<Person>,
    history: StateHistory<ShelterState, ShelterEvent>,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            state: ShelterState::Sheltered,
            vettings: Vec::new(),
            foster_parent: None,
            hospice_provider: None,
            adoptive_parent: None,
            history: StateHistory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn vettings(&self) -> &[Vetting] {
        &self.vettings
    }

    pub fn add_vetting(&mut self, vetting: Vetting) {
        self.vettings.push(vetting);
    }

    pub fn foster_parent(&self) -> Option<&Person> {
        self.foster_parent.as_ref()
    }

    pub fn assign_foster_parent(&mut self, parent: Person) {
        self.foster_parent = Some(parent);
    }

    pub fn hospice_provider(&self) -> Option<&Person> {
        self.hospice_provider.as_ref()
    }

    pub fn assign_hospice_provider(&mut self, provider: Person) {
        self.hospice_provider = Some(provider);
    }

    pub fn adoptive_parent(&self) -> Option<&Person> {
        self.adoptive_parent.as_ref()
    }

    pub fn assign_adoptive_parent(&mut self, parent: Person) {
        self.adoptive_parent = Some(parent);
    }

    pub fn history(&self) -> &StateHistory<ShelterState, ShelterEvent> {
        &self.history
    }
}

impl Stateful<ShelterState, ShelterEvent> for Dog {
    fn current_state(&self) -> &ShelterState {
        &self.state
    }

    fn set_current_state(&mut self, state: ShelterState) {
        self.state = state;
    }

    fn record_transition(&mut self, transition: StateTransition<ShelterState, ShelterEvent>) {
        self.history = self.history.record(transition);
    }
}

/// Declare the shelter lifecycle.
///
/// Vetting requires at least one vet visit on file; fostering, hospice and
/// adoption each require the matching person to be attached first. An
/// adopted dog leaves any foster or hospice placement.
pub fn lifecycle() -> Result<ShelterLifecycle, ConfigurationError> {
    use ShelterState::*;

    let lifecycle = LifecycleBuilder::new()
        .states([Sheltered, Rescued, Vetted, Fostered, Hospiced, Adopted])
        .initial(Sheltered)
        .transition(
            TransitionBuilder::new()
                .on(ShelterEvent::Rescue)
                .from(Sheltered)
                .to(Rescued),
        )?
        .transition(
            TransitionBuilder::new()
                .on(ShelterEvent::Vet)
                .from(Rescued)
                .to(Vetted)
                .when(|dog: &Dog, _| !dog.vettings.is_empty()),
        )?
        .transition(
            TransitionBuilder::new()
                .on(ShelterEvent::Foster)
                .from(Vetted)
                .to(Fostered)
                .when(|dog: &Dog, _| dog.foster_parent.is_some()),
        )?
        .transition(
            TransitionBuilder::new()
                .on(ShelterEvent::Hospice)
                .from_any([Vetted, Fostered])
                .to(Hospiced)
                .when(|dog: &Dog, _| dog.hospice_provider.is_some()),
        )?
        .transition(
            TransitionBuilder::new()
                .on(ShelterEvent::Adopt)
                .from_any([Vetted, Fostered, Hospiced])
                .to(Adopted)
                .when(|dog: &Dog, _| dog.adoptive_parent.is_some())
                .on_success(|dog: &mut Dog, _| {
                    dog.foster_parent = None;
                    dog.hospice_provider = None;
                }),
        )?
        .build()?;

    Ok(lifecycle)
}
