pub mod helpers;
pub mod list;
pub mod create;
pub mod edit;
pub mod view;

pub use self::list::list;
pub use self::create::{new_form, create};
pub use self::edit::{edit_form, update};
pub use self::view::{view, contact};
