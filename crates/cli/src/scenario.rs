//! Scripted dispatch scenarios.
//!
//! Responsibilities:
//! - Define the JSON scenario format: commands, classes, elements,
//!   bindings, a list of inputs, and the expected ordered responses.
//! - Replay the inputs through the gesture matcher and dispatch engine,
//!   recording one response per handler invocation.
//!
//! Does NOT handle:
//! - File I/O or exit-code mapping (see `commands::simulate`).
//!
//! Invariants:
//! - Inputs use gesture syntax ("Ctrl+C", "Alt+RightClick"); each input is
//!   one normalized event.
//! - Responses are recorded as "<Command> on <element>" in invocation
//!   order, so a scenario verifies both routing and ordering.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, bail};
use serde::Deserialize;

use keyroute_engine::library;
use keyroute_engine::{
    CommandBinding, CommandRef, CommandRegistry, DispatchEngine, Element, Gesture, GestureMatcher,
    InputBinding, InputEvent, parse_command, parse_gesture,
};

/// A scripted routing scenario.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Custom commands to register on top of the standard library
    #[serde(default)]
    pub commands: Vec<CommandDecl>,

    /// Element classes and their parents
    #[serde(default)]
    pub classes: Vec<ClassDecl>,

    /// Elements taking part in the scenario; the focused one receives all
    /// inputs
    pub elements: Vec<ElementDecl>,

    /// Class-scope command bindings
    #[serde(default)]
    pub class_bindings: Vec<ClassBindingDecl>,

    /// Instance-scope command bindings
    #[serde(default)]
    pub instance_bindings: Vec<InstanceBindingDecl>,

    /// Input gestures to replay, in order
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Expected responses, in order
    #[serde(default)]
    pub expect: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommandDecl {
    pub name: String,
    pub owner: String,
    /// Default gestures in preference order
    #[serde(default)]
    pub gestures: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ElementDecl {
    pub name: String,
    pub class: String,
    /// Receives the scenario's inputs. Defaults to the first element.
    #[serde(default)]
    pub focus: bool,
    /// Gesture string -> command token
    #[serde(default)]
    pub input_bindings: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassBindingDecl {
    pub class: String,
    pub command: String,
}

#[derive(Debug, Deserialize)]
pub struct InstanceBindingDecl {
    pub element: String,
    pub command: String,
}

/// Outcome of a scenario replay.
#[derive(Debug)]
pub struct SimulationReport {
    /// Responses recorded during replay, in order
    pub responses: Vec<String>,
    /// Responses the scenario expected
    pub expected: Vec<String>,
}

impl SimulationReport {
    pub fn matches(&self) -> bool {
        self.responses == self.expected
    }

    /// Human-readable mismatch description, one line per position.
    pub fn diff(&self) -> String {
        let mut lines = Vec::new();
        let len = self.responses.len().max(self.expected.len());
        for i in 0..len {
            let got = self.responses.get(i).map(String::as_str).unwrap_or("<nothing>");
            let want = self.expected.get(i).map(String::as_str).unwrap_or("<nothing>");
            if got != want {
                lines.push(format!("  [{}] expected '{}', got '{}'", i, want, got));
            }
        }
        lines.join("\n")
    }
}

fn required_gesture(input: &str) -> anyhow::Result<Gesture> {
    parse_gesture(input)
        .with_context(|| format!("bad gesture '{}'", input))?
        .with_context(|| format!("gesture '{}' is empty", input))
}

/// A gesture string describes exactly one normalized event.
fn event_for(gesture: Gesture) -> InputEvent {
    match gesture {
        Gesture::Key(g) => InputEvent::key(g.key(), g.modifiers()),
        Gesture::Mouse(g) => InputEvent::mouse(g.action(), g.modifiers()),
    }
}

fn recording_binding(command: &CommandRef, log: &Rc<RefCell<Vec<String>>>) -> CommandBinding {
    let log = Rc::clone(log);
    CommandBinding::new(Arc::clone(command)).with_execute(move |ctx| {
        let line = format!(
            "{} on {}",
            ctx.command.name(),
            ctx.target.unwrap_or("<none>")
        );
        tracing::debug!(response = %line, "recorded");
        log.borrow_mut().push(line);
    })
}

/// Build the scenario's world and replay its inputs.
pub fn run(scenario: &Scenario, mut observe: impl FnMut(&str, Option<&str>)) -> anyhow::Result<SimulationReport> {
    if scenario.elements.is_empty() {
        bail!("scenario declares no elements");
    }

    let registry = CommandRegistry::new();
    library::install(&registry).context("installing standard library")?;

    for decl in &scenario.commands {
        let mut gestures = Vec::new();
        for g in &decl.gestures {
            gestures.push(required_gesture(g)?);
        }
        registry
            .register(&decl.name, &decl.owner, None, gestures)
            .with_context(|| format!("registering {}.{}", decl.owner, decl.name))?;
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = DispatchEngine::new();

    for decl in &scenario.classes {
        // The table only seals after setup, so registration cannot fail here.
        let _ = engine
            .class_bindings_mut()
            .register_class(&decl.name, decl.parent.as_deref());
    }
    for decl in &scenario.class_bindings {
        let command = parse_command(&decl.command, &registry)
            .with_context(|| format!("class binding for '{}'", decl.class))?;
        let _ = engine
            .class_bindings_mut()
            .register(&decl.class, recording_binding(&command, &log));
    }

    let mut elements = Vec::new();
    for decl in &scenario.elements {
        let mut element = Element::new(&decl.name, &decl.class);
        for (gesture_str, command_token) in &decl.input_bindings {
            let gesture = required_gesture(gesture_str)?;
            let command = parse_command(command_token, &registry)
                .with_context(|| format!("input binding on '{}'", decl.name))?;
            let _ = element
                .input_bindings_mut()
                .add(InputBinding::new(gesture, command));
        }
        elements.push(element);
    }
    for decl in &scenario.instance_bindings {
        let command = parse_command(&decl.command, &registry)
            .with_context(|| format!("instance binding on '{}'", decl.element))?;
        let binding = recording_binding(&command, &log);
        let element = elements
            .iter_mut()
            .find(|e| e.name() == decl.element)
            .with_context(|| format!("unknown element '{}'", decl.element))?;
        let _ = element.command_bindings_mut().add(binding);
    }

    let focused_index = scenario
        .elements
        .iter()
        .position(|e| e.focus)
        .unwrap_or(0);
    let focused = &elements[focused_index];

    let matcher = GestureMatcher::new(&registry);
    for input in &scenario.inputs {
        let event = event_for(required_gesture(input)?);
        match matcher.resolve(&event, Some(focused)) {
            Some(command) => {
                let outcome = engine
                    .execute(&command, None, Some(focused))
                    .with_context(|| format!("dispatching '{}'", input))?;
                observe(input, Some(&format!("{} ({:?})", command.name(), outcome)));
            }
            None => observe(input, None),
        }
    }

    let responses = log.borrow().clone();
    Ok(SimulationReport {
        responses,
        expected: scenario.expect.clone(),
    })
}
