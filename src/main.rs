fn main() {
    gitsource_sync::app::cli::run();
}
