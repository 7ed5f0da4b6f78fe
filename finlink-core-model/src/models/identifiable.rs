/// Trait for entities that are keyed by a non-empty string identifier,
/// unique within the entity's collection.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> &str;
}
