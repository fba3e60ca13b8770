/// Nested record demo.
pub mod batman;
/// Hand-written encoder demo.
pub mod people;
/// Built-in composite demo.
pub mod scalars;
/// Shared output helpers.
pub mod util;
