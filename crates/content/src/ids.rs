//! Record id generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated ids.
pub const ID_LENGTH: usize = 6;

/// Produces fresh record ids.
///
/// Ids only need to be unique within one client's collections; they are not
/// sortable and not suitable as secrets. The repository re-draws when an id
/// is already taken, so generators may collide occasionally.
pub trait IdGenerator: Send + Sync {
    /// Produce a new id.
    fn make_id(&self) -> String;
}

/// Random alphanumeric ids drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn make_id(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn make_id(&self) -> String {
        self()
    }
}
