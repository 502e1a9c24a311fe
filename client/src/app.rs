//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, create_event::CreateEventPage,
    event_details::EventDetailsPage, events::EventsPage, home::HomePage, login::LoginPage,
    org_dashboard::OrgDashboardPage, profile::ProfilePage, register_org::RegisterOrgPage,
    signup::SignupPage, unauthorized::UnauthorizedPage,
};
use crate::state::provider::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Installs the auth context and sets up client-side routing. Protected
/// pages wrap themselves in the route guard; the route table itself stays
/// flat.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/volunteerly.css"/>
        <Title text="Volunteerly"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=(StaticSegment("event"), ParamSegment("id")) view=EventDetailsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("register-org") view=RegisterOrgPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route path=StaticSegment("org-dashboard") view=OrgDashboardPage/>
                    <Route path=StaticSegment("create-event") view=CreateEventPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
