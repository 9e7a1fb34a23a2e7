mod browser;
mod layout;

pub use browser::AlbumBrowser;
pub use layout::AppLayout;
