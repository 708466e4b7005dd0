pub mod enums;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{TimerMode, UiMode};
pub use task::TaskList;
pub use timer::{Durations, TickOutcome, TimerController};
pub use views::{task_rows, TaskRow, TimerView};
