//! Typed event source for the registration form.
//!
//! The page (or a test) holds a [`FormEmitter`] and pushes input and submit
//! events into it; [`crate::form::RegistrationForm::run`] consumes the paired
//! [`FormEvents`] stream. Nothing else reaches the form, so a fake emitter is
//! a complete stand-in for the browser.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use futures::channel::mpsc;

use crate::field::Field;

/// Something the user did to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of `field` changed to `value`.
    Input { field: Field, value: String },
    /// The submit control was activated.
    Submit,
}

/// Sending half of the event source. Cheap to clone into every handler.
#[derive(Clone, Debug)]
pub struct FormEmitter {
    tx: mpsc::UnboundedSender<FormEvent>,
}

/// Receiving half of the event source.
#[derive(Debug)]
pub struct FormEvents {
    rx: mpsc::UnboundedReceiver<FormEvent>,
}

/// Create a connected emitter/stream pair.
#[must_use]
pub fn channel() -> (FormEmitter, FormEvents) {
    let (tx, rx) = mpsc::unbounded();
    (FormEmitter { tx }, FormEvents { rx })
}

impl FormEmitter {
    /// Push an event. Returns `false` once the form has stopped listening.
    pub fn emit(&self, event: FormEvent) -> bool {
        self.tx.unbounded_send(event).is_ok()
    }

    pub fn input(&self, field: Field, value: impl Into<String>) -> bool {
        self.emit(FormEvent::Input { field, value: value.into() })
    }

    pub fn submit(&self) -> bool {
        self.emit(FormEvent::Submit)
    }

    /// Stop the stream after already-queued events drain.
    pub fn close(&self) {
        self.tx.close_channel();
    }
}

impl Stream for FormEvents {
    type Item = FormEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}
