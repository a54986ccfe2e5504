pub mod attendance;
pub mod error;
pub mod qr;
pub mod requests;
pub mod student;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait DatabaseModel: Serialize + DeserializeOwned {
    type ID;

    fn id(&self) -> Self::ID;

    fn id_to_bytes(&self) -> Vec<u8> {
        Self::id_type_to_bytes(self.id())
    }

    fn id_type_to_bytes(id: Self::ID) -> Vec<u8>;
    fn tree() -> String;
}
