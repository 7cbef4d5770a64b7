use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::io::Error;
use std::sync::Arc;

/// Pull-based interface for data streams that produce `Instance`s.
///
/// Implementations may represent finite datasets or unbounded generators.
/// Every returned instance conforms to the same, immutable
/// [`InstanceHeader`] for the lifetime of the stream.
pub trait Stream {
    /// Returns the stream header (relation name, attributes, class index).
    fn header(&self) -> &Arc<InstanceHeader>;

    /// Indicates whether the stream *may* produce more instances.
    ///
    /// If it returns `false`, a subsequent call to [`next_instance`] must
    /// return `None`.
    ///
    /// [`next_instance`]: Stream::next_instance
    fn has_more_instances(&self) -> bool;

    /// Produces the next instance, or `None` if the stream is exhausted.
    fn next_instance(&mut self) -> Option<Box<dyn Instance>>;

    /// Resets the stream to its initial state. Generators re-seed their RNG
    /// and clear internal counters; the header does not change.
    fn restart(&mut self) -> Result<(), Error>;
}
