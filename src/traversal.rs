//! Lazy traversal of every item reachable through `next` links.

use crate::error::FreckleError;
use crate::page::Page;
use serde::de::DeserializeOwned;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, trace};

/// Iterator over the items of a page and of every page after it.
///
/// Pages are fetched on a background thread that hands items over through
/// a rendezvous channel, so it never runs further ahead than the item the
/// consumer is currently waiting for: page *k + 1* is requested only after
/// the last item of page *k* has been taken.
///
/// Dropping the iterator before the end stops the producer. It makes no
/// further requests and exits as soon as its current request (if any)
/// returns.
///
/// If fetching a page fails, iteration ends early. The error is not lost:
/// it can be read with [`AllItems::error`] or [`AllItems::take_error`] once
/// `next` has returned `None`.
///
/// ```no_run
/// use freckle::{Freckle, ListEntries};
///
/// let freckle = Freckle::new("mycompany", "MyFreckleAPIV2Token")?;
/// let mut entries = freckle.entries().list_entries(&ListEntries::new())?.into_all_items();
/// let minutes: u32 = entries.by_ref().map(|e| e.minutes).sum();
/// if let Some(err) = entries.take_error() {
///     return Err(err);
/// }
/// println!("{} minutes logged", minutes);
/// # Ok::<(), freckle::FreckleError>(())
/// ```
pub struct AllItems<T> {
    receiver: Option<Receiver<Result<T, FreckleError>>>,
    stop: Arc<AtomicBool>,
    error: Option<FreckleError>,
}

impl<T> AllItems<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub(crate) fn new(start: Page<T>) -> Self {
        let (sender, receiver) = mpsc::sync_channel(0);
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let spawned = thread::Builder::new()
            .name("freckle-pages".to_string())
            .spawn(move || produce(start, sender, flag));

        match spawned {
            Ok(_) => AllItems {
                receiver: Some(receiver),
                stop,
                error: None,
            },
            Err(e) => AllItems {
                receiver: None,
                stop,
                error: Some(FreckleError::Io(e)),
            },
        }
    }
}

impl<T> AllItems<T> {
    /// The error that ended the traversal early, if any
    pub fn error(&self) -> Option<&FreckleError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<FreckleError> {
        self.error.take()
    }

    /// Has the sequence ended, either exhausted, failed or cancelled?
    pub fn is_finished(&self) -> bool {
        self.receiver.is_none()
    }

    /// Stop the traversal. Subsequent calls to `next` return `None`.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Release);
        self.receiver = None;
    }
}

impl<T> Iterator for AllItems<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let receiver = self.receiver.as_ref()?;
        match receiver.recv() {
            Ok(Ok(item)) => Some(item),
            Ok(Err(e)) => {
                self.error = Some(e);
                self.receiver = None;
                None
            }
            Err(_) => {
                self.receiver = None;
                None
            }
        }
    }
}

impl<T> FusedIterator for AllItems<T> {}

impl<T> Drop for AllItems<T> {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
    }
}

fn produce<T: DeserializeOwned>(
    mut page: Page<T>,
    sender: SyncSender<Result<T, FreckleError>>,
    stop: Arc<AtomicBool>,
) {
    loop {
        for item in std::mem::take(&mut page.items) {
            if stop.load(Ordering::Acquire) || sender.send(Ok(item)).is_err() {
                trace!("page traversal abandoned by consumer");
                return;
            }
        }

        if !page.has_next() {
            trace!("page traversal complete");
            return;
        }
        if stop.load(Ordering::Acquire) {
            return;
        }

        page = match page.next() {
            Ok(next) => next,
            Err(e) => {
                debug!("page traversal stopped: {}", e);
                let _ = sender.send(Err(e));
                return;
            }
        };
    }
}
