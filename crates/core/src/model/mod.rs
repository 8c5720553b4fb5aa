mod evaluation;
mod lesson;
mod policy;
mod student;
mod topic;
mod video;

pub use evaluation::{EvaluationResult, HISTORY_LIMIT, ResultHistory};
pub use lesson::{Lesson, LessonSection, TopicTab};
pub use policy::{ModalPolicy, ModalPolicyError};
pub use student::{Roster, Student, StudentDraft, StudentError, DEFAULT_STUDENT_AGE};
pub use topic::{MenuColumn, TopicError, TopicId};
pub use video::{TutorialVideo, VideoUrlError};
