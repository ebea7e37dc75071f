pub mod view_user_detail;
pub mod view_user_forms;
pub mod view_users;

pub use view_user_detail::view_user_detail;
pub use view_users::view_users;
