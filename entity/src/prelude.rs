pub use super::club::Entity as Club;
pub use super::meeting::Entity as Meeting;
pub use super::room::Entity as Room;
