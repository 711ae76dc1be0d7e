use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <span class="brand">"heliodash"</span>
            <ul>
                <li><a href="/">"Home"</a></li>
                <li><a href="/stations">"Stations"</a></li>
                <li><a href="/charts">"Charts"</a></li>
            </ul>
        </nav>
    }
}
