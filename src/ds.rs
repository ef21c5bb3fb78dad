mod window;

pub use window::TrailingWindow;
