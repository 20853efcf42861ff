//! # robodesk-dashboard
//!
//! Client-side Leptos dashboard for managing digital employees. Built to
//! WASM separately from the server workspace and served by `robodeskd` from
//! its configured dashboard directory.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;
pub mod session;

use components::{ChatAvatar, Nav, ToastContainer};
use pages::{Login, NotFound, RobotDetail, Robots};
use session::{RequireSession, provide_session};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_session();

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/login") view=Login/>
                        <Route
                            path=path!("/")
                            view=|| view! { <RequireSession><Robots/></RequireSession> }
                        />
                        <Route
                            path=path!("/robots/:id")
                            view=|| view! { <RequireSession><RobotDetail/></RequireSession> }
                        />
                    </Routes>
                </main>
                <ChatAvatar/>
            </Router>
        </ToastContainer>
    }
}
