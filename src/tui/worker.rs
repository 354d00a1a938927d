//! Store worker
//!
//! A background thread that owns the [`Storage`] and runs commands in the
//! order they were dispatched, posting each result back as an event.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::storage::Storage;

use super::commands::{execute, Command, QuoteSeed};
use super::event::Event;

/// Handle to the worker thread
pub struct Worker {
    commands: Sender<Command>,
    handle: JoinHandle<()>,
}

impl Worker {
    /// Spawn the worker; results are sent through `events`
    pub fn spawn(storage: Storage, seed: QuoteSeed, events: Sender<Event>) -> Self {
        let (commands, receiver) = mpsc::channel::<Command>();

        let handle = thread::spawn(move || {
            for command in receiver {
                let message = execute(&storage, &seed, command);
                if events.send(Event::Message(message)).is_err() {
                    break;
                }
            }
            debug!("store worker stopped");
        });

        Self { commands, handle }
    }

    /// Queue a command; returns false once the worker has stopped
    pub fn dispatch(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) -> bool {
        commands.into_iter().all(|c| self.dispatch(c))
    }

    /// Close the command channel and wait for in-flight work to finish
    pub fn shutdown(self) {
        drop(self.commands);
        let _ = self.handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTodo, Priority, QuoteFilter, TodoFilter};
    use crate::tui::commands::Message;
    use std::time::Duration;

    #[test]
    fn test_results_arrive_in_dispatch_order() {
        let storage = Storage::open_in_memory().unwrap();
        let (tx, rx) = mpsc::channel();
        let worker = Worker::spawn(storage, QuoteSeed::default(), tx);

        assert!(worker.dispatch_all([
            Command::CreateTodo(NewTodo::new("First", Priority::Low)),
            Command::LoadTodos(TodoFilter::all()),
        ]));

        let timeout = Duration::from_secs(5);
        match rx.recv_timeout(timeout).unwrap() {
            Event::Message(Message::TodoSaved(text)) => assert_eq!(text, "Created todo #1"),
            other => panic!("unexpected {:?}", other),
        }
        match rx.recv_timeout(timeout).unwrap() {
            Event::Message(Message::TodosLoaded(todos)) => assert_eq!(todos.len(), 1),
            other => panic!("unexpected {:?}", other),
        }

        worker.shutdown();
    }

    #[test]
    fn test_seeds_before_first_quote_load() {
        let storage = Storage::open_in_memory().unwrap();
        let (tx, rx) = mpsc::channel();
        let seed = QuoteSeed {
            quotes: vec!["Begin anywhere - John Cage".into()],
            category: "motivational".into(),
        };
        let worker = Worker::spawn(storage, seed, tx);

        assert!(worker.dispatch(Command::LoadQuotes(QuoteFilter::all())));
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Event::Message(Message::QuotesLoaded(quotes)) => {
                assert_eq!(quotes.len(), 1);
                assert_eq!(quotes[0].author, "John Cage");
            }
            other => panic!("unexpected {:?}", other),
        }

        worker.shutdown();
    }
}
