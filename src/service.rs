// SPDX-License-Identifier: MPL-2.0
//! Async toast service.
//!
//! [`ToastService`] owns a [`Manager`] driven by a [`TokioScheduler`] and
//! serializes every mutation through one task: commands from any number of
//! [`Toaster`] handles, and continuations coming back from the scheduler.

use crate::diagnostics::DiagnosticsHandle;
use crate::domain::toast::{Category, DismissAfter};
use crate::scheduler::TokioScheduler;
use crate::ui::notifications::{Manager, Message, ToastApi, ToastOptions};
use crate::ui::surface::Surface;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Request sent from a [`Toaster`] to the service task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        message: String,
        category: Category,
        duration: Option<DismissAfter>,
    },
    /// Add with a category given by name, degraded to info if unknown.
    AddKind {
        message: String,
        kind: String,
        duration: Option<DismissAfter>,
    },
    DismissAll,
    /// Forwards an interaction observed by the host, such as a click.
    Dispatch(Message),
}

/// Cloneable, fire-and-forget handle to a running [`ToastService`].
///
/// Sends never block and never fail visibly: once the service has stopped,
/// commands are dropped.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: UnboundedSender<Command>,
}

impl Toaster {
    fn send(&self, command: Command) {
        let _ = self.tx.send(command);
    }

    /// Shows a toast whose category is given by name.
    pub fn add_kind(
        &self,
        message: impl Into<String>,
        kind: impl Into<String>,
        duration: Option<DismissAfter>,
    ) {
        self.send(Command::AddKind {
            message: message.into(),
            kind: kind.into(),
            duration,
        });
    }

    pub fn dismiss_all(&self) {
        self.send(Command::DismissAll);
    }

    /// Forwards a message to the manager, typically [`Message::Clicked`].
    pub fn dispatch(&self, message: Message) {
        self.send(Command::Dispatch(message));
    }
}

impl ToastApi for Toaster {
    fn add(&mut self, message: impl Into<String>, category: Category, duration: Option<DismissAfter>) {
        self.send(Command::Add {
            message: message.into(),
            category,
            duration,
        });
    }
}

/// Toast manager running on a tokio runtime.
pub struct ToastService<S: Surface> {
    manager: Manager<S, TokioScheduler>,
    messages: UnboundedReceiver<Message>,
    in_flight: Arc<AtomicUsize>,
    command_tx: UnboundedSender<Command>,
    commands: UnboundedReceiver<Command>,
}

impl<S: Surface> ToastService<S> {
    /// Installs a manager on `surface`. Nothing is scheduled until
    /// [`run`](Self::run) is awaited.
    pub fn new(surface: S, options: &ToastOptions) -> Self {
        let (message_tx, messages) = mpsc::unbounded_channel();
        let (command_tx, commands) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(message_tx);
        let in_flight = scheduler.in_flight();

        Self {
            manager: Manager::install(surface, scheduler, options),
            messages,
            in_flight,
            command_tx,
            commands,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.manager.set_diagnostics(handle);
    }

    /// Returns a new handle for sending commands.
    #[must_use]
    pub fn toaster(&self) -> Toaster {
        Toaster {
            tx: self.command_tx.clone(),
        }
    }

    /// Processes commands and scheduled continuations.
    ///
    /// Returns the manager once every [`Toaster`] is dropped and no
    /// continuation is outstanding. Toasts that never auto-dismiss are left
    /// displayed.
    pub async fn run(self) -> Manager<S, TokioScheduler> {
        let Self {
            mut manager,
            mut messages,
            in_flight,
            command_tx,
            mut commands,
        } = self;
        drop(command_tx);

        let mut accepting = true;
        loop {
            if !accepting && in_flight.load(Ordering::SeqCst) == 0 {
                break;
            }

            tokio::select! {
                command = commands.recv(), if accepting => match command {
                    Some(command) => apply(&mut manager, command),
                    None => accepting = false,
                },
                Some(message) = messages.recv() => {
                    TokioScheduler::acknowledge(&in_flight);
                    manager.update(message);
                }
                else => break,
            }
        }

        manager
    }
}

fn apply<S: Surface>(manager: &mut Manager<S, TokioScheduler>, command: Command) {
    match command {
        Command::Add {
            message,
            category,
            duration,
        } => {
            manager.add(message, category, duration);
        }
        Command::AddKind {
            message,
            kind,
            duration,
        } => {
            manager.add_kind(message, &kind, duration);
        }
        Command::DismissAll => {
            manager.dismiss_all();
        }
        Command::Dispatch(message) => manager.update(message),
    }
}
