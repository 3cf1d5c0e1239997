//! Routing definitions for the translation portal.
use crate::core::routing::Screen;
use transdesk_api_models::Role;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/client/login")]
    ClientLogin,
    #[at("/client/signup")]
    ClientSignup,
    #[at("/client/files")]
    ClientFiles,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/signup")]
    AdminSignup,
    #[at("/admin/files")]
    AdminFiles,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub(crate) const fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Root,
            Self::ClientLogin => Screen::Login(Role::Client),
            Self::ClientSignup => Screen::Signup(Role::Client),
            Self::ClientFiles => Screen::Files(Role::Client),
            Self::AdminLogin => Screen::Login(Role::Admin),
            Self::AdminSignup => Screen::Signup(Role::Admin),
            Self::AdminFiles => Screen::Files(Role::Admin),
            Self::NotFound => Screen::NotFound,
        }
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Root => Self::Home,
            Screen::Login(Role::Client) => Self::ClientLogin,
            Screen::Signup(Role::Client) => Self::ClientSignup,
            Screen::Files(Role::Client) => Self::ClientFiles,
            Screen::Login(Role::Admin) => Self::AdminLogin,
            Screen::Signup(Role::Admin) => Self::AdminSignup,
            Screen::Files(Role::Admin) => Self::AdminFiles,
            Screen::NotFound => Self::NotFound,
        }
    }
}
