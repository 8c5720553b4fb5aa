mod basic_concepts;
mod control_structures;
mod database;
mod debugging;
mod functions_procedures;
mod libraries_modules;
mod oop_concepts;
mod windows_forms;

pub use basic_concepts::{BasicConceptsBody, BasicConceptsModal};
pub use control_structures::ControlStructuresModal;
pub use database::{DatabaseProgrammingBody, DatabaseProgrammingModal};
pub use debugging::{DebuggingBody, DebuggingModal};
pub use functions_procedures::{FunctionsProceduresBody, FunctionsProceduresModal};
pub use libraries_modules::{LibrariesModulesBody, LibrariesModulesModal};
pub use oop_concepts::{OopConceptsBody, OopConceptsModal};
pub use windows_forms::{VideoPanel, WindowsFormsBody, WindowsFormsModal};
