/// Single-value, overwrite-on-publish holding area for a not-yet-delivered
/// push payload.
///
/// The payload is kept as the raw serialized string it arrived with, so a
/// failed decode can be retried by a later drain.
#[derive(Debug, Default)]
pub(crate) struct PendingEventSlot {
    raw: Option<String>,
    consumer_registered: bool,
}

impl PendingEventSlot {
    /// Buffer `raw`, overwriting any prior undelivered payload.
    pub fn store(&mut self, raw: &str) {
        self.raw = Some(raw.to_string());
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn clear(&mut self) {
        self.raw = None;
    }

    pub fn consumer_registered(&self) -> bool {
        self.consumer_registered
    }

    pub fn set_consumer_registered(&mut self) {
        self.consumer_registered = true;
    }

    /// Back to the cold-start state: no payload, no consumer.
    pub fn reset(&mut self) {
        self.raw = None;
        self.consumer_registered = false;
    }
}
