use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "school_access_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
            log::warn!("could not persist the access token");
        }
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn clear_access_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
