pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskInput, DEFAULT_STATUS_ID};
pub use user::{NewUser, RegisterRequest, RegisterResponse, User};
