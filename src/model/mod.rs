/// JSON tour documents.
pub mod document;
/// Steps and their content.
pub mod step;
/// Theme configuration.
pub mod theme;
