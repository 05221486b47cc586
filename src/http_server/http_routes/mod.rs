pub mod client_page;
pub mod generate_playlist;
