pub mod command;
pub mod ids;
pub mod task_list;
pub mod view;

pub use command::{Command, Outcome};
pub use ids::IdGenerator;
pub use task_list::TaskList;
pub use view::{TaskListView, TaskRow};
