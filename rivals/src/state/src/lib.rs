pub mod friends;
pub mod rivals;
