use tour_core::{NavigationState, StatePersistence, TourError};
use web_sys as web;

/// Snapshot storage in `window.localStorage`.
pub struct LocalStoragePersistence {
    key: String,
}

impl LocalStoragePersistence {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }

    fn storage(&self) -> tour_core::Result<web::Storage> {
        web::window()
            .ok_or_else(|| TourError::Persistence("no window".into()))?
            .local_storage()
            .map_err(|e| TourError::Persistence(format!("{:?}", e)))?
            .ok_or_else(|| TourError::Persistence("localStorage unavailable".into()))
    }
}

impl StatePersistence for LocalStoragePersistence {
    fn save(&mut self, state: &NavigationState) -> tour_core::Result<()> {
        let json = state.to_json()?;
        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|e| TourError::Persistence(format!("{:?}", e)))
    }

    fn clear(&mut self) -> tour_core::Result<()> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| TourError::Persistence(format!("{:?}", e)))?;
        log::info!("[storage] cleared '{}'", self.key);
        Ok(())
    }
}
