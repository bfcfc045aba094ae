use std::rc::Rc;

use crate::shared::config::ApiConfig;
use crate::shared::http::{ApiClient, Navigator, Transport};
use crate::system::auth::storage::KeyValueStorage;
use crate::system::auth::{AuthService, SessionStore};
use crate::system::pages::ApiPageSource;
use crate::system::users::UserService;

/// Services shared by every page, all backed by one client and one session.
#[derive(Clone)]
pub struct AppServices {
    pub client: ApiClient,
    pub auth: AuthService,
    pub users: UserService,
    pub pages: ApiPageSource,
}

impl AppServices {
    pub fn new(
        config: ApiConfig,
        storage: Rc<dyn KeyValueStorage>,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let client = ApiClient::new(config, transport, SessionStore::new(storage), navigator);
        Self {
            auth: AuthService::new(client.clone()),
            users: UserService::new(client.clone()),
            pages: ApiPageSource::new(client.clone()),
            client,
        }
    }

    /// localStorage, `fetch` and `window.location`
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: ApiConfig) -> Self {
        use crate::shared::http::navigator::LocationNavigator;
        use crate::shared::http::transport::GlooTransport;
        use crate::system::auth::storage::BrowserStorage;

        Self::new(
            config,
            Rc::new(BrowserStorage),
            Rc::new(GlooTransport),
            Rc::new(LocationNavigator),
        )
    }
}
