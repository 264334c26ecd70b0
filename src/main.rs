fn main() {
    sdkc::app::cli::run();
}
