fn main() {
    create_kadena_app::app::cli::run();
}
