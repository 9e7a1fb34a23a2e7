fn main() {
    dioxus::launch(albums_web::App);
}
