use crate::components::organisms::{Footer, Navbar};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AuthPageTemplateProps {
    #[prop_or(AttrValue::Static("Authentication"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthPageTemplate)]
pub(crate) fn auth_page_template(props: &AuthPageTemplateProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-background">
            <Navbar />
            <main class="flex-1 flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
                <div class="max-w-md w-full space-y-8">
                    <div class="text-center">
                        <h1 class="text-3xl font-bold text-foreground">{props.title.clone()}</h1>
                    </div>
                    { for props.children.iter() }
                </div>
            </main>
            <Footer />
        </div>
    }
}
