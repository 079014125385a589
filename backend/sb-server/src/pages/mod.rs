//! Server-rendered site pages.
//!
//! Every page is a plain `String` of HTML wrapped by `layout::render`. Any
//! text that did not come from this crate goes through `html::escape`.

pub mod about;
pub mod assets;
pub mod contact;
pub mod error_page;
pub mod home;
pub mod html;
pub mod layout;
pub mod not_found;
pub mod project_detail;
pub mod projects;
pub mod team;
