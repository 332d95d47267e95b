use crate::components::organisms::{Footer, Navbar};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardTemplateProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DashboardTemplate)]
pub(crate) fn dashboard_template(props: &DashboardTemplateProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-background">
            <Navbar />
            <main class="flex-1 py-8 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto">
                    { for props.children.iter() }
                </div>
            </main>
            <Footer />
        </div>
    }
}
