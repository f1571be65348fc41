use desktop_runtime::{ShellProvider, ShellRoot};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Glasstop" />
        <Meta name="description" content="A browser-tab desktop shell concept." />

        <main class="site-root">
            <ShellProvider>
                <ShellRoot />
            </ShellProvider>
        </main>
    }
}
