/// Identifier for a body in a [`crate::body_set::BodySet`].
///
/// This is an index into `BodySet::bodies`, and is only meaningful until
/// the set is cleared.
pub type BodyId = usize;
