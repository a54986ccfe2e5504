use models::DatabaseModel;
use sled::{open, Db};
use std::path::Path;
use std::sync::Arc;

pub struct Database {
    db: Db,
}

impl Database {
    pub fn new(db_path: &Path) -> Arc<Database> {
        let db = open(db_path).unwrap();
        Arc::new(Self { db })
    }

    pub fn insert<T>(&self, model: T)
    where
        T: DatabaseModel,
    {
        let json = serde_json::to_vec(&model).unwrap();
        let tree = self.db.open_tree(T::tree()).unwrap();
        tree.insert(model.id_to_bytes(), json).unwrap();
    }

    pub fn fetch<T>(&self, id: T::ID) -> Option<T>
    where
        T: DatabaseModel,
    {
        let tree = self.db.open_tree(T::tree()).unwrap();
        let bytes = tree.get(T::id_type_to_bytes(id)).unwrap();

        bytes.map(|bytes| serde_json::from_slice::<T>(&bytes).unwrap())
    }

    pub fn all<T>(&self) -> Vec<T>
    where
        T: DatabaseModel,
    {
        let tree = self.db.open_tree(T::tree()).unwrap();
        tree.iter()
            .map(|entry| {
                let (_, bytes) = entry.unwrap();
                serde_json::from_slice::<T>(&bytes).unwrap()
            })
            .collect()
    }
}
