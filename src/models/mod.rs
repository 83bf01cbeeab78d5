pub mod borrow;
pub mod cookbook;
pub mod tag;

pub use borrow::BorrowRecord;
pub use cookbook::{Cookbook, NewCookbook};
pub use tag::{CookbookTag, Tag};
