/// Top-level navigation hook, used to send the user to the login page.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Navigates by assigning `window.location.href`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for LocationNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available, cannot navigate to {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
