fn main() {
    callgen::app::cli::run();
}
