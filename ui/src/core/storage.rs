//! Credential persistence: browser `localStorage` on web, a JSON file under
//! the user's data directory on desktop.

use std::rc::Rc;

use api::models::{AuthResponse, AuthUser};
use api::{ApiError, CredentialStore};

/// Store for the current platform.
pub fn platform_credentials() -> Rc<dyn CredentialStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::BrowserCredentials)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match native::FileCredentials::open_default() {
            Some(store) => Rc::new(store),
            None => {
                tracing::warn!("no data directory; credentials will not persist");
                Rc::new(api::MemoryCredentials::new())
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserCredentials;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileCredentials;

fn user_json(user: &AuthUser) -> Result<String, ApiError> {
    serde_json::to_string(user).map_err(|e| ApiError::Storage(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use tracing::warn;
    use web_sys::Storage;

    const TOKEN_KEY: &str = "auth_token";
    const USER_KEY: &str = "auth_user";

    /// `localStorage`-backed store; shared by every tab of the origin.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserCredentials;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn read(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    impl CredentialStore for BrowserCredentials {
        fn token(&self) -> Option<String> {
            read(TOKEN_KEY)
        }

        fn user(&self) -> Option<AuthUser> {
            let raw = read(USER_KEY)?;
            match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(%err, "discarding unreadable stored user");
                    None
                }
            }
        }

        fn save(&self, auth: &AuthResponse) -> Result<(), ApiError> {
            let storage = local_storage()
                .ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))?;
            let user = user_json(&auth.user)?;
            storage
                .set_item(TOKEN_KEY, &auth.token)
                .and_then(|()| storage.set_item(USER_KEY, &user))
                .map_err(|_| ApiError::Storage("localStorage write rejected".into()))
        }

        fn clear(&self) {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;
    use serde::{Deserialize, Serialize};
    use tracing::warn;

    use super::*;

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Stored {
        token: Option<String>,
        /// Same JSON the web build keeps under `auth_user`.
        user: Option<String>,
    }

    /// JSON file store, cached in memory and written through on change.
    #[derive(Debug)]
    pub struct FileCredentials {
        path: PathBuf,
        cache: RefCell<Stored>,
    }

    impl FileCredentials {
        /// `<data dir>/credentials.json`, if the platform has a data dir.
        pub fn open_default() -> Option<Self> {
            let dirs = ProjectDirs::from("com", "BarberStudy", "BarberStudy")?;
            Some(Self::at(dirs.data_dir().join("credentials.json")))
        }

        pub fn at(path: impl Into<PathBuf>) -> Self {
            let path = path.into();
            let cache = load(&path);
            Self {
                path,
                cache: RefCell::new(cache),
            }
        }

        fn write(&self, stored: &Stored) -> Result<(), ApiError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|e| ApiError::Storage(e.to_string()))?;
            }
            let json =
                serde_json::to_string_pretty(stored).map_err(|e| ApiError::Storage(e.to_string()))?;
            fs::write(&self.path, json).map_err(|e| ApiError::Storage(e.to_string()))
        }
    }

    fn load(path: &Path) -> Stored {
        let Ok(raw) = fs::read_to_string(path) else {
            return Stored::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(%err, path = %path.display(), "ignoring corrupt credentials file");
            Stored::default()
        })
    }

    impl CredentialStore for FileCredentials {
        fn token(&self) -> Option<String> {
            self.cache.borrow().token.clone()
        }

        fn user(&self) -> Option<AuthUser> {
            let cache = self.cache.borrow();
            serde_json::from_str(cache.user.as_deref()?).ok()
        }

        fn save(&self, auth: &AuthResponse) -> Result<(), ApiError> {
            let stored = Stored {
                token: Some(auth.token.clone()),
                user: Some(user_json(&auth.user)?),
            };
            self.write(&stored)?;
            self.cache.replace(stored);
            Ok(())
        }

        fn clear(&self) {
            self.cache.replace(Stored::default());
            if let Err(err) = fs::remove_file(&self.path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(%err, "failed to remove credentials file");
                }
            }
        }
    }

}
