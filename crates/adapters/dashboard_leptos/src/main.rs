use heliodash_dashboard::App;
use leptos::mount::mount_to_body;

fn main() {
    mount_to_body(App);
}
