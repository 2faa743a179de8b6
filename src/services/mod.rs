pub mod exercises;
pub mod logs;
pub mod users;

pub use exercises::ExerciseService;
pub use logs::{LogQuery, LogService};
pub use users::UserService;
