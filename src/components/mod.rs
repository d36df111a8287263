pub mod connect_button;
pub mod wave_card;
pub mod wave_form;

pub use connect_button::ConnectButton;
pub use wave_card::WaveCard;
pub use wave_form::WaveForm;
