//! End-to-end routing: input event → gesture matcher → dispatch engine.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use keyroute_engine::library;
use keyroute_engine::{
    CommandBinding, CommandRegistry, CommandTarget, DispatchEngine, DispatchError,
    DispatchOutcome, Element, GestureMatcher, InputBinding, InputEvent, Key, KeyGesture,
    Modifiers, MouseAction,
};

struct NotAnElement;

impl CommandTarget for NotAnElement {
    fn input_element(&self) -> Option<&Element> {
        None
    }
}

fn recording_binding(
    command: &keyroute_engine::CommandRef,
    log: &Rc<RefCell<Vec<String>>>,
    label: &str,
) -> CommandBinding {
    let log = Rc::clone(log);
    let label = label.to_string();
    CommandBinding::new(Arc::clone(command)).with_execute(move |ctx| {
        log.borrow_mut().push(format!(
            "{} on {}",
            label,
            ctx.target.unwrap_or("<none>")
        ));
    })
}

#[test]
fn key_press_routes_from_gesture_to_class_handler() {
    let registry = CommandRegistry::new();
    library::install(&registry).unwrap();
    let copy = registry.lookup("Copy", library::APPLICATION).unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = DispatchEngine::new();
    engine.class_bindings_mut().register_class("TextBox", Some("Control")).unwrap();
    engine
        .class_bindings_mut()
        .register("Control", recording_binding(&copy, &log, "Copy"))
        .unwrap();

    let editor = Element::new("editor", "TextBox");
    let matcher = GestureMatcher::new(&registry);

    let event = InputEvent::key(Key::Char('C'), Modifiers::CONTROL);
    let command = matcher.resolve(&event, Some(&editor)).unwrap();
    let outcome = engine.execute(&command, None, Some(&editor)).unwrap();

    assert_eq!(outcome, DispatchOutcome::Executed);
    assert_eq!(*log.borrow(), ["Copy on editor"]);
}

#[test]
fn instance_input_binding_reroutes_a_library_gesture() {
    let registry = CommandRegistry::new();
    library::install(&registry).unwrap();
    let paste_special = registry
        .register("PasteSpecial", "EditorCommands", None, Vec::new())
        .unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut editor = Element::new("editor", "TextBox");
    let gesture = KeyGesture::new(Key::Char('V'), Modifiers::CONTROL).unwrap();
    editor
        .input_bindings_mut()
        .add(InputBinding::new(gesture.into(), Arc::clone(&paste_special)))
        .unwrap();
    editor
        .command_bindings_mut()
        .add(recording_binding(&paste_special, &log, "PasteSpecial"))
        .unwrap();

    let engine = DispatchEngine::new();
    let matcher = GestureMatcher::new(&registry);

    let event = InputEvent::key(Key::Char('V'), Modifiers::CONTROL);
    let command = matcher.resolve(&event, Some(&editor)).unwrap();
    assert!(Arc::ptr_eq(&command, &paste_special));

    let outcome = engine.execute(&command, None, Some(&editor)).unwrap();
    assert_eq!(outcome, DispatchOutcome::Executed);
    assert_eq!(*log.borrow(), ["PasteSpecial on editor"]);
}

#[test]
fn mouse_gesture_routes_like_a_key_gesture() {
    let registry = CommandRegistry::new();
    let open_menu = registry
        .register("OpenMenu", "MenuCommands", None, Vec::new())
        .unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut canvas = Element::new("canvas", "DrawingSurface");
    let gesture = keyroute_engine::MouseGesture::new(MouseAction::RightClick, Modifiers::ALT);
    canvas
        .input_bindings_mut()
        .add(InputBinding::new(gesture.into(), Arc::clone(&open_menu)))
        .unwrap();
    canvas
        .command_bindings_mut()
        .add(recording_binding(&open_menu, &log, "OpenMenu"))
        .unwrap();

    let matcher = GestureMatcher::new(&registry);
    let event = InputEvent::mouse(MouseAction::RightClick, Modifiers::ALT);
    let command = matcher.resolve(&event, Some(&canvas)).unwrap();

    let engine = DispatchEngine::new();
    engine.execute(&command, None, Some(&canvas)).unwrap();
    assert_eq!(*log.borrow(), ["OpenMenu on canvas"]);
}

#[test]
fn invalid_target_raises_before_any_routing() {
    let registry = CommandRegistry::new();
    library::install(&registry).unwrap();
    let copy = registry.lookup("Copy", library::APPLICATION).unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = DispatchEngine::new();
    engine
        .class_bindings_mut()
        .register("Control", recording_binding(&copy, &log, "Copy"))
        .unwrap();

    let result = engine.execute(&copy, None, Some(&NotAnElement));
    assert_eq!(result, Err(DispatchError::InvalidTarget));
    assert!(log.borrow().is_empty());
}

#[test]
fn command_with_bindings_on_unrelated_element_stays_dormant() {
    let registry = CommandRegistry::new();
    library::install(&registry).unwrap();
    let copy = registry.lookup("Copy", library::APPLICATION).unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = DispatchEngine::new();
    engine
        .class_bindings_mut()
        .register("TextBox", recording_binding(&copy, &log, "Copy"))
        .unwrap();

    // A Slider is not a TextBox and declares no relation to it.
    let slider = Element::new("volume", "Slider");
    let outcome = engine.execute(&copy, None, Some(&slider)).unwrap();
    assert_eq!(outcome, DispatchOutcome::NoBinding);
    assert!(log.borrow().is_empty());
}
