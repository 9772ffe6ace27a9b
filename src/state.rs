use crate::store::{Collection, DocumentStore, StoreError};

/// Shared application state: the store client plus one handle per collection,
/// built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub users: Collection,
    pub bookings: Collection,
    pub packages: Collection,
    pub guides: Collection,
    pub reviews: Collection,
    pub wishlist: Collection,
    pub story: Collection,
}

impl AppState {
    pub fn new(store: DocumentStore) -> Result<Self, StoreError> {
        Ok(Self {
            users: store.collection("users")?,
            bookings: store.collection("bookings")?,
            packages: store.collection("packages")?,
            guides: store.collection("guides")?,
            reviews: store.collection("reviews")?,
            wishlist: store.collection("wishlist")?,
            story: store.collection("story")?,
            store,
        })
    }
}
