use crate::core::data::colour::Colour;

/// Maps an escape iteration count to a display colour. Implementations are
/// pure lookups shared read-only across render workers.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
