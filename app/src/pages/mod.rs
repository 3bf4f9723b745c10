mod home;
mod play;

pub use home::Home;
pub use play::Play;
