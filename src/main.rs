fn main() {
    sunogen::app::cli::run();
}
