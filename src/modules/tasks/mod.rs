pub mod list;
pub mod model;
pub mod storage;
pub mod user_interface;

pub use list::{TaskList, UserTasks};
pub use model::{Task, TaskError, TaskField, TaskStatus};
pub use storage::{load_tasks, save_tasks};
pub use user_interface::session_menu;
