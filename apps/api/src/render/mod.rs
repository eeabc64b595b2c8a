// Static site rendering: portfolio + template name → HTML, and HTML + README → ZIP.
// Pure functions; no I/O beyond the in-memory archive.

pub mod package;
pub mod templates;

pub use package::package_site;
pub use templates::TemplateKind;
