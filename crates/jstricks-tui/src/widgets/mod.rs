//! Widget library for the trick catalog UI

mod category_nav;
mod confirm_dialog;
mod header;
mod search_bar;
mod snippet_detail;
mod snippet_list;
mod status_bar;

pub use category_nav::CategoryNav;
pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use search_bar::SearchBar;
pub use snippet_detail::SnippetDetail;
pub use snippet_list::SnippetList;
pub use status_bar::StatusBar;
