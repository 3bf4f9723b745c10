use dioxus::prelude::*;

use crate::pages::{Home, Play};
use crate::components::Layout;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Play {},
    #[route("/about")]
    Home {},
}
