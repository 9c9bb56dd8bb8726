mod error;
pub mod note_table;
pub mod render;
pub mod tuning;


pub use error::TableError;
pub use note_table::{DiagnosticLine, NOTE_COUNT, NoteEntry, NoteTable};
pub use render::{OutputFormat, render_c_array, render_diagnostics, render_rust_array};
pub use tuning::TuningConstants;
