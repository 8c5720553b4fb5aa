mod lesson_vm;
mod markdown_vm;
mod practice_vm;
mod roster_vm;
mod shell_vm;
mod time_fmt;

pub use lesson_vm::{SectionVm, TabsVm, map_section};
pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use practice_vm::{PracticeResultVm, map_practice_results};
pub use roster_vm::{StudentRowVm, map_student_rows, parse_student_age};
pub use shell_vm::ShellState;
pub use time_fmt::format_clock_time;
