// Command Pattern - named operations behind a remote control.
// Commands are bound to a receiver when built, registered under a name,
// and dispatched by exact name. Unknown names degrade to a printed notice.

use crate::config::{Binding, LightAction};
use crate::console::Console;
use crate::error::{PatternError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};

// ============================================================================
// Command interface
// ============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait Command {
    fn execute(&mut self);
}

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug)]
pub struct Light {
    console: Console,
    on: bool,
}

impl Light {
    pub fn new(console: Console) -> Self {
        Self { console, on: false }
    }

    /// A light ready to be shared by several commands.
    pub fn shared(console: Console) -> Rc<RefCell<Light>> {
        Rc::new(RefCell::new(Self::new(console)))
    }

    pub fn on(&mut self) {
        self.on = true;
        self.console.say("Light is on");
    }

    pub fn off(&mut self) {
        self.on = false;
        self.console.say("Light is off");
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

// ============================================================================
// Concrete commands
// ============================================================================

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self) {
        self.light.borrow_mut().on();
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self) {
        self.light.borrow_mut().off();
    }
}

/// Closure-backed command, for one-off actions that don't deserve a type.
pub struct FnCommand {
    execute_fn: Box<dyn FnMut()>,
}

impl FnCommand {
    pub fn new(execute_fn: impl FnMut() + 'static) -> Self {
        Self {
            execute_fn: Box::new(execute_fn),
        }
    }
}

impl Command for FnCommand {
    fn execute(&mut self) {
        (self.execute_fn)();
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Outcome of [`RemoteControl::execute`]. Safe to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Executed,
    NotFound,
}

pub struct RemoteControl {
    commands: HashMap<String, Box<dyn Command>>,
    console: Console,
}

impl RemoteControl {
    pub fn new(console: Console) -> Self {
        Self {
            commands: HashMap::new(),
            console,
        }
    }

    /// Builds a remote whose bindings all drive the same light.
    pub fn with_bindings(
        console: Console,
        light: &Rc<RefCell<Light>>,
        bindings: &[Binding],
    ) -> Self {
        let mut remote = Self::new(console);
        for binding in bindings {
            let command: Box<dyn Command> = match binding.action {
                LightAction::On => Box::new(LightOnCommand::new(Rc::clone(light))),
                LightAction::Off => Box::new(LightOffCommand::new(Rc::clone(light))),
            };
            remote.register(binding.name.clone(), command);
        }
        remote
    }

    /// Binds `name` to `command`. An existing binding is replaced.
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        let name = name.into();
        if self.commands.insert(name.clone(), command).is_some() {
            debug!(command = %name, "replaced existing binding");
        } else {
            debug!(command = %name, "registered");
        }
    }

    /// Runs the command bound to `name`, or reports that nothing is bound.
    /// Prints nothing on a miss; the caller decides what a miss means.
    pub fn try_execute(&mut self, name: &str) -> Result<()> {
        let command = self
            .commands
            .get_mut(name)
            .ok_or_else(|| PatternError::command_not_found(name))?;
        debug!(command = %name, "dispatching");
        command.execute();
        Ok(())
    }

    /// Runs the command bound to `name`. A miss prints a notice and returns
    /// normally.
    pub fn execute(&mut self, name: &str) -> Dispatch {
        match self.try_execute(name) {
            Ok(()) => Dispatch::Executed,
            Err(err) => {
                warn!(command = %name, "no command registered");
                self.console.say(err.to_string());
                Dispatch::NotFound
            }
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

pub fn remote_control_example(console: &Console, bindings: &[Binding]) {
    let living_room_light = Light::shared(console.clone());
    let mut remote_control =
        RemoteControl::with_bindings(console.clone(), &living_room_light, bindings);

    remote_control.execute("on");
    remote_control.execute("off");
    remote_control.execute("undo");
}

// ============================================================================
// Tests
// ============================================================================
