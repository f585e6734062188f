fn main() {
    deepget::cli::run();
}
