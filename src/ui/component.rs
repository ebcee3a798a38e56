//! Headless take on relm4's component model.
//!
//! A component is a model updated by `Input` messages. It reports to its
//! parent via `Output` messages and runs background work with
//! [`ComponentSender::oneshot_command`], whose results come back through
//! [`Component::update_cmd`]. Messages are processed one at a time by the
//! task that [`Controller::launch`] spawns.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

pub trait Component: Sized + Send + 'static {
    type Init;
    type Input: Send + 'static;
    type Output: Send + 'static;
    type CommandOutput: Send + 'static;

    fn init(init: Self::Init, sender: &ComponentSender<Self>) -> Self;

    fn update(&mut self, message: Self::Input, sender: &ComponentSender<Self>);

    fn update_cmd(&mut self, _message: Self::CommandOutput, _sender: &ComponentSender<Self>) {}
}

pub struct ComponentSender<C: Component> {
    input: UnboundedSender<C::Input>,
    output: UnboundedSender<C::Output>,
    command: UnboundedSender<C::CommandOutput>,
}

impl<C: Component> Clone for ComponentSender<C> {
    fn clone(&self) -> Self {
        ComponentSender {
            input: self.input.clone(),
            output: self.output.clone(),
            command: self.command.clone(),
        }
    }
}

impl<C: Component> ComponentSender<C> {
    /// Queues a message to the component itself.
    pub fn input(&self, message: C::Input) {
        if self.input.send(message).is_err() {
            debug!("Component is gone, input dropped");
        }
    }

    /// Emits a message to whoever owns the [`Controller`]. Gives the message
    /// back when nobody listens anymore.
    pub fn output(&self, message: C::Output) -> Result<(), C::Output> {
        self.output.send(message).map_err(|e| e.0)
    }

    /// Runs `future` in the background and feeds its result into
    /// [`Component::update_cmd`].
    ///
    /// The future runs to completion even when the [`Controller`] is dropped
    /// meanwhile, only its result is discarded then. Side effects that must
    /// not be lost belong in the future itself.
    pub fn oneshot_command<F>(&self, future: F)
    where
        F: Future<Output = C::CommandOutput> + Send + 'static,
    {
        let command = self.command.clone();
        tokio::spawn(async move {
            if command.send(future.await).is_err() {
                debug!("Component is gone, command result dropped");
            }
        });
    }
}

/// Owner's handle of a running component. Dropping it stops the message
/// loop, pending commands still finish.
pub struct Controller<C: Component> {
    model: Arc<Mutex<C>>,
    sender: ComponentSender<C>,
    output: UnboundedReceiver<C::Output>,
    task: JoinHandle<()>,
}

impl<C: Component> Controller<C> {
    /// Initializes the component and starts processing its messages.
    ///
    /// Requires Tokio.
    pub fn launch(init: C::Init) -> Controller<C> {
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        let sender = ComponentSender {
            input: input_tx,
            output: output_tx,
            command: command_tx,
        };

        let model = Arc::new(Mutex::new(C::init(init, &sender)));

        let task = {
            let model = model.clone();
            let sender = sender.clone();
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        Some(message) = input_rx.recv() => {
                            lock(&model).update(message, &sender);
                        }
                        Some(message) = command_rx.recv() => {
                            lock(&model).update_cmd(message, &sender);
                        }
                        else => break,
                    }
                }
            })
        };

        Controller {
            model,
            sender,
            output: output_rx,
            task,
        }
    }

    pub fn emit(&self, message: C::Input) {
        self.sender.input(message)
    }

    pub fn sender(&self) -> &ComponentSender<C> {
        &self.sender
    }

    /// Waits for the next output of the component.
    pub async fn recv(&mut self) -> Option<C::Output> {
        self.output.recv().await
    }

    /// Output that is already waiting, if any.
    pub fn try_recv(&mut self) -> Option<C::Output> {
        self.output.try_recv().ok()
    }

    /// Current state of the model. Do not hold across `.await`.
    pub fn model(&self) -> MutexGuard<'_, C> {
        lock(&self.model)
    }
}

impl<C: Component> Drop for Controller<C> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn lock<C>(model: &Mutex<C>) -> MutexGuard<'_, C> {
    model.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterInput {
        Add(u32),
        AddLater(u32),
    }

    impl Component for Counter {
        type Init = u32;
        type Input = CounterInput;
        type Output = u32;
        type CommandOutput = u32;

        fn init(init: u32, _sender: &ComponentSender<Self>) -> Self {
            Counter { value: init }
        }

        fn update(&mut self, message: CounterInput, sender: &ComponentSender<Self>) {
            match message {
                CounterInput::Add(n) => {
                    self.value += n;
                    sender.output(self.value).unwrap_or_default();
                }
                CounterInput::AddLater(n) => sender.oneshot_command(async move { n }),
            }
        }

        fn update_cmd(&mut self, message: u32, sender: &ComponentSender<Self>) {
            sender.input(CounterInput::Add(message));
        }
    }

    #[tokio::test]
    async fn processes_inputs_in_order() {
        let mut counter = Controller::<Counter>::launch(1);
        counter.emit(CounterInput::Add(2));
        counter.emit(CounterInput::Add(3));

        assert_eq!(counter.recv().await, Some(3));
        assert_eq!(counter.recv().await, Some(6));
        assert_eq!(counter.model().value, 6);
    }

    #[tokio::test]
    async fn commands_come_back() {
        let mut counter = Controller::<Counter>::launch(0);
        counter.emit(CounterInput::AddLater(5));

        assert_eq!(counter.recv().await, Some(5));
    }

    #[tokio::test]
    async fn commands_outlive_controller() {
        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        let counter = Controller::<Counter>::launch(0);
        counter.sender().oneshot_command(async move {
            tokio::task::yield_now().await;
            done_tx.send(()).unwrap_or_default();
            1
        });
        drop(counter);

        assert!(done_rx.await.is_ok());
    }
}
