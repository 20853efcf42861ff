use robodesk_dashboard::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
