pub mod collection;
pub mod delete;
pub mod forms;

pub use collection::{handle_users_loaded, load_users, mount, unmount};
pub use delete::{cancel_delete, confirm_delete, handle_user_deleted, request_delete};
pub use forms::{
    cancel_form, field_changed, handle_user_created, handle_user_updated,
    open_create, open_edit, submit_create, submit_edit,
};
